/// Partial-update slot for an optional task field.
///
/// `NoChange` leaves the stored value alone, `Set` replaces it and `Clear`
/// empties it. Task updates carry one for `completed_at`, where clearing and
/// leaving alone mean different things.
///
/// ```
/// use focusboard_domain::FieldUpdate;
///
/// let mut completed_at = Some(3);
/// FieldUpdate::NoChange.apply_to(&mut completed_at);
/// assert_eq!(completed_at, Some(3));
///
/// FieldUpdate::<i32>::Clear.apply_to(&mut completed_at);
/// assert_eq!(completed_at, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    NoChange,
    Set(T),
    Clear,
}

impl<T> Default for FieldUpdate<T> {
    fn default() -> Self {
        FieldUpdate::NoChange
    }
}

impl<T> FieldUpdate<T> {
    pub fn apply_to(self, field: &mut Option<T>) {
        match self {
            FieldUpdate::NoChange => {}
            FieldUpdate::Set(value) => *field = Some(value),
            FieldUpdate::Clear => *field = None,
        }
    }
}
