use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    sitestack completions bash > ~/.bash_completion.d/sitestack\n\n\
                  Generate zsh completions:\n    sitestack completions zsh > ~/.zfunc/_sitestack\n\n\
                  Generate fish completions:\n    sitestack completions fish > ~/.config/fish/completions/sitestack.fish\n\n\
                  Generate PowerShell completions:\n    sitestack completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
