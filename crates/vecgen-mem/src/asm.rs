//! Assembly literal formatting.

/// Format `data` as a single `.byte` directive.
///
/// Values are lowercase hex without zero padding, separated by `", "`:
/// `[0x1, 0xff, 0xa]` becomes `.byte 0x1, 0xff, 0xa`. Empty input yields
/// the bare `".byte "`.
pub fn make_assembly_array(data: &[u8]) -> String {
    let operands = data
        .iter()
        .map(|byte| format!("{byte:#x}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!(".byte {operands}")
}
