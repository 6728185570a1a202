//! The numbered main menu.
//!
//! Reads one choice per line, prompts for the fields each action needs, and
//! validates them before calling the API. Bad numbers are reported and the menu
//! continues; end of input ends the session like choosing `0`.

use super::print::{print_all_patients, print_messages, print_patients, print_stats};
use colored::Colorize;
use std::io::{BufRead, Write};
use ward::api::WardApi;
use ward::error::Result;
use ward::model::{Patient, PatientId, PatientUpdate};
use ward::store::DataStore;

const MENU: &[&str] = &[
    "1. Add New Patient",
    "2. Search Patient by ID",
    "3. Search Patient by Name or ID",
    "4. Update Patient Information",
    "5. Delete Patient",
    "6. Display All Patients",
    "7. Statistics",
    "8. Export as JSON",
    "0. Exit",
];

/// Whether the loop should keep going after an action.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub struct Session<'a, S: DataStore, R: BufRead, W: Write> {
    api: &'a mut WardApi<S>,
    input: R,
    out: W,
}

impl<'a, S: DataStore, R: BufRead, W: Write> Session<'a, S, R, W> {
    pub fn new(api: &'a mut WardApi<S>, input: R, out: W) -> Self {
        Self { api, input, out }
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.read_line()? else {
                writeln!(self.out)?;
                break;
            };

            let flow = match choice.trim() {
                "1" => self.add_patient()?,
                "2" => self.search_by_id()?,
                "3" => self.find_patients()?,
                "4" => self.update_patient()?,
                "5" => self.delete_patient()?,
                "6" => self.display_all()?,
                "7" => self.show_stats()?,
                "8" => self.export()?,
                "0" => {
                    writeln!(self.out, "Exiting System. Goodbye!")?;
                    Flow::Exit
                }
                _ => {
                    writeln!(self.out, "{}", "Invalid option. Try again.".yellow())?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }
        self.out.flush()?;
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.out, "\n{}", "--- MAIN MENU ---".bold())?;
        for item in MENU {
            writeln!(self.out, "{}", item)?;
        }
        write!(self.out, "Enter choice: ")?;
        self.out.flush()?;
        Ok(())
    }

    /// Next input line without its line ending; `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.out, "{}", label)?;
        self.out.flush()?;
        self.read_line()
    }

    fn prompt_id(&mut self, label: &str) -> Result<Option<Option<PatientId>>> {
        Ok(self.prompt(label)?.map(|s| s.trim().parse().ok()))
    }

    fn add_patient(&mut self) -> Result<Flow> {
        let Some(id) = self.prompt_id("Enter ID: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(id) = id else {
            return self.report_error("ID and Age must be numbers.");
        };
        let Some(name) = self.prompt("Enter Name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(age) = self.prompt("Enter Age: ")? else {
            return Ok(Flow::Exit);
        };
        let Ok(age) = age.trim().parse::<u32>() else {
            return self.report_error("ID and Age must be numbers.");
        };
        let Some(gender) = self.prompt("Enter Gender: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(history) = self.prompt("Enter Medical History: ")? else {
            return Ok(Flow::Exit);
        };

        let name = name.trim();
        if name.is_empty() {
            return self.report_error("Name cannot be empty.");
        }

        let patient = Patient::new(id, name, age, gender.trim(), history.trim());
        let result = self.api.create_patient(patient)?;
        print_messages(&mut self.out, &result.messages)?;
        Ok(Flow::Continue)
    }

    fn search_by_id(&mut self) -> Result<Flow> {
        let Some(id) = self.prompt_id("Enter ID to search: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(id) = id else {
            return self.report_error("Invalid ID format.");
        };

        let result = self.api.get_patient(id)?;
        if !result.listed_patients.is_empty() {
            writeln!(self.out, "Record Found:")?;
            print_patients(&mut self.out, &result.listed_patients)?;
        }
        print_messages(&mut self.out, &result.messages)?;
        Ok(Flow::Continue)
    }

    /// A number looks up that id; any other text searches names.
    fn find_patients(&mut self) -> Result<Flow> {
        let Some(query) = self.prompt("Enter Name or ID to search: ")? else {
            return Ok(Flow::Exit);
        };

        let result = self.api.find(&query)?;
        print_patients(&mut self.out, &result.listed_patients)?;
        print_messages(&mut self.out, &result.messages)?;
        Ok(Flow::Continue)
    }

    /// Prompts for every field first and applies them in one update, so a bad
    /// age leaves the record untouched. Blank answers keep the current value.
    fn update_patient(&mut self) -> Result<Flow> {
        let Some(id) = self.prompt_id("Enter ID to update: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(id) = id else {
            return self.report_error("Invalid ID format.");
        };

        let found = self.api.get_patient(id)?;
        let Some(current) = found.listed_patients.into_iter().next() else {
            return self.report_error("Patient not found.");
        };

        writeln!(
            self.out,
            "Current Data: {}, Age: {}, History: {}",
            current.name, current.age, current.medical_history
        )?;
        writeln!(self.out, "{}", "(Press Enter to keep current value)".dimmed())?;

        let Some(name) = self.prompt(&format!("New Name ({}): ", current.name))? else {
            return Ok(Flow::Exit);
        };
        let Some(age) = self.prompt(&format!("New Age ({}): ", current.age))? else {
            return Ok(Flow::Exit);
        };
        let Some(gender) = self.prompt(&format!("New Gender ({}): ", current.gender))? else {
            return Ok(Flow::Exit);
        };
        let Some(history) =
            self.prompt(&format!("New History ({}): ", current.medical_history))?
        else {
            return Ok(Flow::Exit);
        };

        let age = age.trim();
        let age = if age.is_empty() {
            None
        } else {
            match age.parse::<u32>() {
                Ok(age) => Some(age),
                Err(_) => return self.report_error("Invalid number format."),
            }
        };

        let update = PatientUpdate {
            name: Some(name.trim().to_string()),
            age,
            gender: Some(gender.trim().to_string()),
            medical_history: Some(history.trim().to_string()),
        };
        let result = self.api.update_patient(id, &update)?;
        print_messages(&mut self.out, &result.messages)?;
        Ok(Flow::Continue)
    }

    fn delete_patient(&mut self) -> Result<Flow> {
        let Some(id) = self.prompt_id("Enter ID to delete: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(id) = id else {
            return self.report_error("Invalid ID format.");
        };

        let result = self.api.delete_patient(id)?;
        print_messages(&mut self.out, &result.messages)?;
        Ok(Flow::Continue)
    }

    fn display_all(&mut self) -> Result<Flow> {
        let result = self.api.list_patients()?;
        if !result.listed_patients.is_empty() {
            print_all_patients(&mut self.out, &result.listed_patients)?;
        }
        print_messages(&mut self.out, &result.messages)?;
        Ok(Flow::Continue)
    }

    fn show_stats(&mut self) -> Result<Flow> {
        let result = self.api.stats()?;
        if let Some(stats) = &result.stats {
            print_stats(&mut self.out, stats)?;
        }
        Ok(Flow::Continue)
    }

    fn export(&mut self) -> Result<Flow> {
        let result = self.api.export()?;
        if let Some(json) = &result.export {
            writeln!(self.out, "{}", json)?;
        }
        Ok(Flow::Continue)
    }

    fn report_error(&mut self, message: &str) -> Result<Flow> {
        writeln!(self.out, "{}", format!("Error: {}", message).red())?;
        Ok(Flow::Continue)
    }
}
