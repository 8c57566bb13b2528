/// Rendering of cipher output. `Text` renders encrypt output as uppercase
/// hex digits (AES) or raw characters (DES) and decrypt output as
/// characters; `Binary` renders every output byte as eight '0'/'1' chars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Binary,
}
