/// Conceptual lifecycle of a single field.
///
/// A field moves `Pristine -> Touched -> (Valid | Invalid)`. An `Invalid`
/// field returns to `Valid` only after its value changes and a new
/// validation pass runs; re-validation is explicit, never per keystroke.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldStatus {
    /// Never touched and never judged.
    #[default]
    Pristine,
    /// Lost focus at least once, not yet judged by a validation pass.
    Touched,
    /// Judged by the last validation pass with no error recorded.
    Valid,
    /// Has an error recorded, from the schema or the manual overlay.
    Invalid,
}
