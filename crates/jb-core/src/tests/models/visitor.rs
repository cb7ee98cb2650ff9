use crate::{Role, User, Visitor};

#[test]
fn test_default_is_anonymous() {
    let visitor = Visitor::default();
    assert!(visitor.is_anonymous());
    assert!(visitor.user().is_none());
}

#[test]
fn test_from_option() {
    let user = User::new("u1", "", "", Role::Jobseeker);
    let visitor = Visitor::from(Some(user.clone()));

    assert_eq!(visitor.user(), Some(&user));
    assert_eq!(visitor.into_user(), Some(user));
    assert!(Visitor::from(None).is_anonymous());
}
