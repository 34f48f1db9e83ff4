use filemanager::cli::app::FileManagerCli;
use filemanager::domain::ports::config::AppConfig;
use filemanager::domain::ports::input::InputSource;
use filemanager::error::AppError;
use filemanager::infra::input::{InquireInput, LineInput};
use filemanager::tracing::init_logging;
use std::io::{self, IsTerminal};

fn main() -> Result<(), AppError> {
    init_logging();

    let config = AppConfig::new();
    tracing::info!(color = config.color, sentinel = %config.sentinel, "{} ready", config.app_name);

    // Prompts interactifs sur un terminal, lecture ligne à ligne sinon
    let mut input: Box<dyn InputSource> = if io::stdin().is_terminal() {
        Box::new(InquireInput::new())
    } else {
        Box::new(LineInput::stdin())
    };

    FileManagerCli::new(config).run(input.as_mut())
}
