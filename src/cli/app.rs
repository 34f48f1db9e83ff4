// src/cli/app.rs
use tracing::{info, warn};

use crate::{
    application::file_service::FileService,
    cli::ui,
    core::highlight,
    domain::{
        file::{MenuChoice, ModifyMode},
        ports::{config::AppConfig, input::InputSource},
    },
    error::{AppError, Declined, ErrInput},
    infra::file_system::FileSystemAdapter,
};

pub struct FileManagerCli {
    service: FileService<FileSystemAdapter>,
}

impl FileManagerCli {
    pub fn new(config: AppConfig) -> Self {
        Self {
            service: FileService::new(FileSystemAdapter::new(), config),
        }
    }

    fn config(&self) -> &AppConfig {
        self.service.config()
    }

    /// Menu loop. Returns on the exit choice or when `input` runs dry;
    /// handler failures are reported and the menu comes back.
    pub fn run(&self, input: &mut dyn InputSource) -> Result<(), AppError> {
        loop {
            ui::main_menu(self.config());

            let raw = match input.line(ui::MENU_PROMPT) {
                Ok(raw) => raw,
                Err(e) if e.is_exit() => break,
                Err(e) if e.is_declined() => continue,
                // terminal broken: prompting again would spin forever
                Err(e @ AppError::Inquire(_)) => return Err(e),
                Err(e) => {
                    warn!("menu input rejected: {}", e);
                    ui::failure(self.config(), "Invalid option. Please try again.");
                    continue;
                }
            };

            let choice = match MenuChoice::parse(&raw) {
                Ok(MenuChoice::Exit) => break,
                Ok(choice) => choice,
                Err(_) => {
                    ui::failure(self.config(), "Invalid option. Please try again.");
                    continue;
                }
            };

            match self.dispatch(choice, input) {
                Ok(()) => {}
                Err(e) if e.is_exit() => break,
                Err(e) if e.is_declined() => {
                    info!("{:?} declined: {}", choice, e);
                    ui::notice(self.config(), "Operation cancelled.");
                }
                Err(e) => {
                    warn!("{:?} failed: {}", choice, e);
                    ui::failure(self.config(), &format!("❌ {}", e));
                }
            }
        }

        ui::success(self.config(), "Exiting FileManagerApp. Goodbye!");
        Ok(())
    }

    pub fn dispatch(
        &self,
        choice: MenuChoice,
        input: &mut dyn InputSource,
    ) -> Result<(), AppError> {
        match choice {
            MenuChoice::Read => self.read_file(input),
            MenuChoice::Write => self.write_file(input),
            MenuChoice::Modify => self.modify_file(input),
            MenuChoice::Delete => self.delete_file(input),
            MenuChoice::Info => self.file_info(input),
            MenuChoice::Exit => Ok(()),
        }
    }

    pub fn read_file(&self, input: &mut dyn InputSource) -> Result<(), AppError> {
        let path = ui::path_prompt(input, "Enter file path to read:")?;
        self.service.ensure_file(&path)?;

        let config = self.config();
        ui::success(config, "\n--- FILE CONTENT ---");
        self.service.for_each_line(&path, |number, line| {
            let rendered = highlight::render(line, config.color);
            println!("{}", ui::numbered_line(config, number, &rendered));
        })?;
        Ok(())
    }

    pub fn write_file(&self, input: &mut dyn InputSource) -> Result<(), AppError> {
        let path = ui::path_prompt(input, "Enter file path to create/write:")?;

        // Confirmer avant d'écraser un fichier existant
        if self.service.exists(&path) && !input.confirm("File exists. Overwrite?")? {
            return Err(AppError::Declined(Declined::Overwrite));
        }

        let lines = ui::text_block(input, self.config(), "Enter text")?;
        self.service.write(&path, &lines)?;
        ui::success(self.config(), "✅ File saved successfully!");
        Ok(())
    }

    pub fn modify_file(&self, input: &mut dyn InputSource) -> Result<(), AppError> {
        let path = ui::path_prompt(input, "Enter file path to modify:")?;
        self.service.ensure_file(&path)?;

        ui::modify_menu(self.config());
        let mode = ModifyMode::parse(&input.line(">")?)?;

        match mode {
            ModifyMode::Append => {
                let lines = ui::text_block(input, self.config(), "Enter text to append")?;
                self.service.append(&path, &lines)?;
                ui::success(self.config(), "✅ Content appended!");
            }
            ModifyMode::Overwrite => {
                ui::failure(self.config(), "⚠️ WARNING: This will erase all content.");
                if !input.confirm("Proceed?")? {
                    return Err(AppError::Declined(Declined::Overwrite));
                }
                let lines = ui::text_block(input, self.config(), "Enter new content")?;
                self.service.overwrite(&path, &lines)?;
                ui::success(self.config(), "✅ File overwritten!");
            }
            ModifyMode::Insert => {
                let line = ui::line_number_prompt(input)?;

                // Vérifier la position avant de demander le texte
                let max = self.service.line_count(&path)? + 1;
                if line < 1 || line > max {
                    return Err(AppError::Input(ErrInput::LineOutOfRange { line, max }));
                }

                let lines = ui::text_block(input, self.config(), "Enter text to insert")?;
                self.service.insert_at_line(&path, line, &lines)?;
                ui::success(
                    self.config(),
                    &format!("✅ Content inserted at line {}", line),
                );
            }
        }

        Ok(())
    }

    pub fn delete_file(&self, input: &mut dyn InputSource) -> Result<(), AppError> {
        let path = ui::path_prompt(input, "Enter file path to delete:")?;
        self.service.ensure_file(&path)?;

        if !input.confirm("Are you sure you want to delete this file?")? {
            return Err(AppError::Declined(Declined::Delete));
        }

        self.service.delete(&path)?;
        ui::success(self.config(), "✅ File deleted successfully.");
        Ok(())
    }

    pub fn file_info(&self, input: &mut dyn InputSource) -> Result<(), AppError> {
        let path = ui::path_prompt(input, "Enter file path:")?;
        let info = self.service.info(&path)?;
        ui::file_info(self.config(), &info);
        Ok(())
    }
}
