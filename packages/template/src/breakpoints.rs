use crate::model::{Breakpoint, CompiledTemplate};

/// Id of the implicit breakpoint every style is attached to
pub const BASE_BREAKPOINT_ID: &str = "base";

pub fn base_breakpoint() -> Breakpoint {
    Breakpoint {
        id: BASE_BREAKPOINT_ID.to_string(),
        label: String::new(),
    }
}

/// Register the base breakpoint once if any style was produced
pub fn ensure_base_breakpoint(template: &mut CompiledTemplate) {
    if template.styles.is_empty() {
        return;
    }
    if !template
        .breakpoints
        .iter()
        .any(|breakpoint| breakpoint.id == BASE_BREAKPOINT_ID)
    {
        template.breakpoints.push(base_breakpoint());
    }
}
