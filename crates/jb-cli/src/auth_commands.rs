use crate::commands::to_output;
use crate::context::AppContext;
use crate::{CliError, CliResult};

use jb_core::{Experience, Registration, Role, SocialLinks, Visitor};

use clap::Subcommand;
use log::warn;
use serde_json::{Value, json};

#[derive(Subcommand)]
pub enum AuthCommands {
    /// Create an account
    Register {
        #[arg(long)]
        full_name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        /// employer or jobseeker
        #[arg(long)]
        role: Role,

        #[arg(long)]
        phone_number: Option<String>,

        #[arg(long)]
        bio: Option<String>,

        #[arg(long, default_value = "")]
        location: String,

        /// Repeat for several skills
        #[arg(long = "skill")]
        skills: Vec<String>,

        /// Repeat for several qualifications
        #[arg(long = "qualification")]
        qualifications: Vec<String>,

        #[arg(long)]
        linked_in: Option<String>,

        #[arg(long)]
        github: Option<String>,

        #[arg(long)]
        portfolio: Option<String>,

        /// title|company|location|start[|end][|description]. Repeat for several positions.
        #[arg(long = "experience")]
        experience: Vec<Experience>,
    },

    /// Sign in and remember who you are
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Sign out everywhere this machine remembers you
    Logout {
        /// Forget the local identity even if the server call fails
        #[arg(long)]
        force: bool,
    },

    /// Print the signed-in user, or "anonymous"
    Whoami,
}

impl AuthCommands {
    pub async fn run(self, ctx: &mut AppContext) -> CliResult<Value> {
        match self {
            AuthCommands::Register {
                full_name,
                email,
                password,
                role,
                phone_number,
                bio,
                location,
                skills,
                qualifications,
                linked_in,
                github,
                portfolio,
                experience,
            } => {
                let registration = Registration {
                    full_name,
                    email,
                    password,
                    role,
                    phone_number,
                    bio,
                    location,
                    qualifications,
                    skills,
                    experience,
                    social_links: SocialLinks {
                        linked_in,
                        github,
                        portfolio,
                    },
                };
                registration.validate()?;

                let body = ctx.client.register(&registration).await?;
                eprintln!("Account created. Sign in with `jb auth login`.");
                Ok(body)
            }

            AuthCommands::Login { email, password } => {
                let outcome = ctx.client.login(&email, &password).await?;

                match outcome.session_cookie.as_deref() {
                    Some(cookie) => ctx.credentials.save(cookie)?,
                    None => warn!("Sign-in response carried no session cookie"),
                }
                ctx.client.session_cookie = outcome.session_cookie;

                eprintln!(
                    "Signed in as {} ({})",
                    outcome.user.full_name, outcome.user.role
                );
                let output = to_output(&outcome.user)?;
                ctx.identity.set(outcome.user);
                Ok(output)
            }

            AuthCommands::Logout { force } => match ctx.client.logout().await {
                Ok(body) => {
                    sign_out(ctx)?;
                    eprintln!("Logged out successfully!");
                    Ok(body)
                }
                Err(e) if force => {
                    warn!("Server logout failed, signing out locally: {e}");
                    sign_out(ctx)?;
                    eprintln!("Signed out locally. The server session may still be active.");
                    Ok(json!({ "message": "Signed out locally" }))
                }
                Err(e) => Err(CliError::usage(format!(
                    "Logout failed. Please try again. ({})",
                    e.user_message()
                ))),
            },

            AuthCommands::Whoami => match ctx.identity.current() {
                Visitor::SignedIn(user) => to_output(user),
                Visitor::Anonymous => Ok(Value::String(String::from("anonymous"))),
            },
        }
    }
}

fn sign_out(ctx: &mut AppContext) -> CliResult<()> {
    ctx.identity.clear();
    ctx.credentials.clear()?;
    ctx.client.session_cookie = None;
    Ok(())
}
