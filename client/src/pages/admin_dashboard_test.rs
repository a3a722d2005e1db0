use super::*;

#[test]
fn row_class_highlights_admins() {
    assert_eq!(row_class(Role::Admin), "user-table__row user-table__row--admin");
    assert_eq!(row_class(Role::User), "user-table__row");
}
