use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use tracing::{error, warn};

use crate::cli::console::Console;
use crate::cli::Flow;
use crate::error::TasktunesError;
use crate::models::Task;
use crate::output;
use crate::store::TaskManager;

const BANNER: &str = "📋 Welcome to the OOP Task Manager CLI";
const MENU: &str = "\n1. Add Task\n2. List Tasks\n3. Complete Task\n4. Save\n5. Quit";

pub fn run(path: &Path) -> i32 {
    let stdin = io::stdin();
    let console = Console::new(stdin.lock(), io::stdout().lock());
    let result = TaskApp::open(path, console).and_then(|mut app| app.run());
    match result {
        Ok(()) => 0,
        Err(e) => {
            error!(code = e.code.as_str(), "{}", e.message);
            eprintln!("Error: {}", e.message);
            1
        }
    }
}

/// Menu loop state for the task list.
pub struct TaskApp<R, W> {
    manager: TaskManager,
    path: PathBuf,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> TaskApp<R, W> {
    pub fn new(manager: TaskManager, path: impl Into<PathBuf>, console: Console<R, W>) -> Self {
        Self {
            manager,
            path: path.into(),
            console,
        }
    }

    pub fn open(path: &Path, console: Console<R, W>) -> Result<Self, TasktunesError> {
        Ok(Self::new(TaskManager::open(path)?, path, console))
    }

    pub fn run(&mut self) -> Result<(), TasktunesError> {
        self.console.say(BANNER)?;
        loop {
            self.console.say(MENU)?;
            let Some(choice) = self.console.ask("Choose an option: ")? else {
                self.closed();
                return Ok(());
            };
            let flow = match choice.as_str() {
                "1" => self.add_task()?,
                "2" => self.list_all()?,
                "3" => self.complete_task()?,
                "4" => self.save()?,
                "5" => self.quit()?,
                _ => {
                    self.console.say("Invalid choice. Try again.")?;
                    Flow::Continue
                }
            };
            match flow {
                Flow::Continue => {}
                Flow::Quit => return Ok(()),
                Flow::Closed => {
                    self.closed();
                    return Ok(());
                }
            }
        }
    }

    fn add_task(&mut self) -> Result<Flow, TasktunesError> {
        let Some(title) = self.console.ask("Task title: ")? else {
            return Ok(Flow::Closed);
        };
        let Some(priority) = self.console.ask("Priority (Low/Medium/High): ")? else {
            return Ok(Flow::Closed);
        };
        let Some(due_date) = self.console.ask("Due date (YYYY-MM-DD or leave blank): ")? else {
            return Ok(Flow::Closed);
        };

        let due_date = (!due_date.is_empty()).then_some(due_date);
        self.manager.add(Task::new(title, priority, due_date));
        self.console.say("✅ Task added.")?;
        Ok(Flow::Continue)
    }

    fn list_all(&mut self) -> Result<Flow, TasktunesError> {
        self.console.say("\n--- All Tasks ---")?;
        output::text::write_task_list(self.console.output_mut(), self.manager.list(None))?;
        Ok(Flow::Continue)
    }

    fn complete_task(&mut self) -> Result<Flow, TasktunesError> {
        self.console.say("\n--- Incomplete Tasks ---")?;
        output::text::write_task_list(self.console.output_mut(), self.manager.list(Some(false)))?;
        let Some(input) = self.console.ask("Enter task number to complete: ")? else {
            return Ok(Flow::Closed);
        };

        let number = match parse_task_number(&input) {
            Ok(number) => number,
            Err(e) => {
                self.console.say(&e.message)?;
                return Ok(Flow::Continue);
            }
        };
        // Numbers shown to the user are 1-based.
        if number >= 1 && self.manager.complete(number - 1) {
            self.console.say("✅ Task marked complete.")?;
        } else {
            self.console.say(format!("No task #{number}."))?;
        }
        Ok(Flow::Continue)
    }

    fn save(&mut self) -> Result<Flow, TasktunesError> {
        self.manager.save(&self.path)?;
        self.console.say("✅ Tasks saved.")?;
        Ok(Flow::Continue)
    }

    fn quit(&mut self) -> Result<Flow, TasktunesError> {
        self.manager.save(&self.path)?;
        self.console.say("👋 Bye!")?;
        Ok(Flow::Quit)
    }

    fn closed(&self) {
        warn!(path = %self.path.display(), "input closed before quit, unsaved changes discarded");
    }
}

pub fn parse_task_number(input: &str) -> Result<usize, TasktunesError> {
    input
        .trim()
        .parse()
        .map_err(|_| TasktunesError::invalid_task_number(input))
}
