//! Hook command implementation

use crate::error::{CliError, Result};

/// Prompt hook snippet for zsh.
///
/// Runs `secenv info` once per prompt redraw and exposes the segment via
/// `$SECENV_PROMPT_SEGMENT`; the production warning is printed above the
/// prompt when due.
const ZSH_HOOK: &str = r#"# secenv prompt hook
autoload -Uz add-zsh-hook

_secenv_precmd() {
  typeset -g SECENV_PROMPT_SEGMENT
  SECENV_PROMPT_SEGMENT="$(command secenv info 2>/dev/null)" || SECENV_PROMPT_SEGMENT=""

  local warning
  warning="$(command secenv warning 2>/dev/null)"
  [[ -n "$warning" ]] && print -P -- "$warning"
}

add-zsh-hook precmd _secenv_precmd
RPROMPT='${SECENV_PROMPT_SEGMENT}'"${RPROMPT}"
"#;

/// Run the hook command: print the integration snippet for a shell
pub fn run_hook(shell: &str) -> Result<i32> {
    match shell {
        "zsh" => {
            print!("{ZSH_HOOK}");
            Ok(0)
        }
        other => Err(CliError::user(format!(
            "no hook available for {other:?} (currently supported: zsh)"
        ))),
    }
}
