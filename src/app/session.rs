use crate::adapters::Console;
use crate::app::command::{Command, CommandParseError, HELP};
use crate::core::form::{ActionOutcome, CustomerForm};
use crate::core::render::render_page;
use crate::domain::ports::CustomerApi;
use crate::utils::error::Result;
use std::io::{BufRead, Write};

const PROMPT: &str = "> ";

/// Interactive terminal session driving a [`CustomerForm`].
pub struct Session<'c, A, R, W>
where
    A: CustomerApi,
    R: BufRead + Send,
    W: Write + Send,
{
    form: CustomerForm<A, &'c Console<R, W>>,
    console: &'c Console<R, W>,
}

impl<'c, A, R, W> Session<'c, A, R, W>
where
    A: CustomerApi,
    R: BufRead + Send,
    W: Write + Send,
{
    pub fn new(api: A, console: &'c Console<R, W>) -> Self {
        Self {
            form: CustomerForm::new(api, console),
            console,
        }
    }

    pub fn form(&self) -> &CustomerForm<A, &'c Console<R, W>> {
        &self.form
    }

    fn render(&self) -> Result<()> {
        self.console
            .print(&render_page(self.form.buffer(), self.form.customers()))
    }

    /// Loads the table once, then reads commands until `salir` or end of input.
    pub async fn run(&mut self) -> Result<()> {
        self.form.load_customers().await;
        self.render()?;

        while let Some(line) = self.console.read_line(PROMPT)? {
            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(CommandParseError::Empty) => continue,
                Err(e) => {
                    self.console.print(&format!("{} (escriba 'ayuda')", e))?;
                    continue;
                }
            };

            if !self.dispatch(command).await? {
                break;
            }
        }

        tracing::info!("Session finished");
        Ok(())
    }

    /// Applies one command. Returns `false` when the session should end.
    pub async fn dispatch(&mut self, command: Command) -> Result<bool> {
        let outcome = match command {
            Command::SetSearchId(value) => {
                self.form.set_search_id(value);
                return Ok(true);
            }
            Command::SetName(value) => {
                self.form.set_name(value);
                return Ok(true);
            }
            Command::SetSurname(value) => {
                self.form.set_surname(value);
                return Ok(true);
            }
            Command::Help => {
                self.console.print(HELP)?;
                return Ok(true);
            }
            Command::Quit => return Ok(false),
            Command::Show => ActionOutcome::Completed,
            Command::Clear => {
                self.form.clear_fields();
                ActionOutcome::Completed
            }
            Command::Save => self.form.save_customer().await,
            Command::Search => self.form.find_customer().await,
            Command::Update => self.form.update_customer().await,
            Command::Delete => self.form.delete_customer().await,
            Command::List => self.form.load_customers().await,
        };

        tracing::debug!("Action finished: {:?}", outcome);
        self.render()?;
        Ok(true)
    }
}
