//! [`City`] definitions.

/// City an [`Address`] is located in.
///
/// [`Address`]: super::Address
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct City {
    /// ID of this [`City`].
    pub id: Id,

    /// [`Name`] of this [`City`].
    pub name: Name,
}

define_id!(City);

define_text! {
    #[doc = "Name of a [`City`]."]
    Name(max = 100)
}
