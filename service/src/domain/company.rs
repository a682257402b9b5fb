//! [`Company`] definitions.

/// Company employing [`Employee`]s.
///
/// [`Employee`]: super::Employee
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Company {
    /// ID of this [`Company`].
    pub id: Id,

    /// [`Name`] of this [`Company`].
    pub name: Name,
}

define_id!(Company);

define_text! {
    #[doc = "Name of a [`Company`]."]
    Name(max = 150)
}
