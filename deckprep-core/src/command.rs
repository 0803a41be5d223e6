use crate::policy::{ArgumentMode, PrefixPolicy};

/// Port every generated command targets.
pub const OSC_PORT: u16 = 8000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandBinding {
    pub path: String,
    pub argument: i64,
    pub port: u16,
}

/// Command for the entry at zero-based `index`. Pure; the suffix widens past 99.
pub fn assign(policy: &PrefixPolicy, index: usize) -> CommandBinding {
    let path = if policy.augment_index {
        format!("{}{:02}", policy.prefix, index + 1)
    } else {
        policy.prefix.clone()
    };
    let argument = match policy.argument_mode {
        ArgumentMode::Constant => policy.argument_base,
        ArgumentMode::Serial => policy.argument_base + index as i64,
    };
    CommandBinding {
        path,
        argument,
        port: OSC_PORT,
    }
}
