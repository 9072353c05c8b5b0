use std::io::{self, Write};

use clap::Parser;
use tracing::debug;

use crate::{
    cli::command::{Cli, Commands},
    config, logger,
    prelude::{Address, AppError, Email, Name, Person, Phone, Storage, Tag, open_storage},
};

pub fn run_app() -> Result<(), AppError> {
    config::load_env();
    let cli = Cli::parse();
    logger::init_logger(cli.verbose);

    let path = config::resolve_storage_path(cli.file);
    let storage = open_storage(Some(&path))?;
    debug!(path = storage.get_path(), "using storage file");

    let stdout = io::stdout();
    execute(cli.command, storage.as_ref(), &mut stdout.lock())
}

/// Runs one command against `storage`, writing user-facing output to `out`.
pub fn execute(
    command: Commands,
    storage: &dyn Storage,
    out: &mut dyn Write,
) -> Result<(), AppError> {
    match command {
        Commands::Path => {
            writeln!(out, "{}", storage.get_path())?;
        }

        Commands::List { tag } => {
            let address_book = storage.load()?;
            let tag = tag.map(|t| Tag::new(&t)).transpose()?;

            let persons: Vec<&Person> = address_book
                .persons()
                .iter()
                .filter(|p| tag.as_ref().is_none_or(|t| p.tags.contains(t)))
                .collect();

            if persons.is_empty() {
                writeln!(out, "No person in address book")?;
                return Ok(());
            }

            for (i, person) in persons.iter().enumerate() {
                writeln!(out, "\n{}. {}", i + 1, person)?;
            }
        }

        Commands::Add {
            name,
            phone,
            email,
            address,
            tags,
            private_phone,
            private_email,
            private_address,
        } => {
            let tags = tags
                .iter()
                .map(|t| Tag::new(t))
                .collect::<Result<Vec<Tag>, _>>()?;
            let person = Person::new(
                Name::new(&name)?,
                Phone::new(&phone, private_phone)?,
                Email::new(&email, private_email)?,
                Address::new(&address, private_address)?,
            )
            .with_tags(tags);

            let mut address_book = storage.load()?;
            address_book.add_person(person)?;
            storage.save(&address_book)?;

            writeln!(out, "Person added successfully")?;
        }

        Commands::Delete { name, phone } => {
            let name = Name::new(&name)?;
            let phone = Phone::new(&phone, false)?;

            let mut address_book = storage.load()?;
            if address_book.remove_person(&name, &phone).is_none() {
                return Err(AppError::NotFound("Person".to_string()));
            }
            storage.save(&address_book)?;

            writeln!(out, "Person deleted successfully")?;
        }

        Commands::Clear => {
            let mut address_book = storage.load()?;
            address_book.clear();
            storage.save(&address_book)?;

            writeln!(out, "Address book cleared")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::MemoryStorage;

    fn add_command(name: &str, phone: &str, tags: &[&str]) -> Commands {
        Commands::Add {
            name: name.to_string(),
            phone: phone.to_string(),
            email: "someone@example.com".to_string(),
            address: "1 Main Street".to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            private_phone: false,
            private_email: true,
            private_address: false,
        }
    }

    fn run(command: Commands, storage: &MemoryStorage) -> Result<String, AppError> {
        let mut out = Vec::new();
        execute(command, storage, &mut out)?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    #[test]
    fn add_then_list() -> Result<(), AppError> {
        let storage = MemoryStorage::new();

        let output = run(add_command("Alice", "08031234567", &["work"]), &storage)?;
        assert!(output.contains("Person added successfully"));

        let listing = run(Commands::List { tag: None }, &storage)?;
        assert!(listing.contains("1. Name: Alice"));
        assert!(listing.contains("Email: (private)"));
        assert!(listing.contains("Tags: work"));
        Ok(())
    }

    #[test]
    fn list_filters_by_tag() -> Result<(), AppError> {
        let storage = MemoryStorage::new();
        run(add_command("Alice", "08031234567", &["work"]), &storage)?;
        run(add_command("Bob", "08037654321", &["gym"]), &storage)?;

        let listing = run(
            Commands::List {
                tag: Some("gym".to_string()),
            },
            &storage,
        )?;
        assert!(listing.contains("Name: Bob"));
        assert!(!listing.contains("Name: Alice"));

        let none = run(
            Commands::List {
                tag: Some("school".to_string()),
            },
            &storage,
        )?;
        assert!(none.contains("No person in address book"));
        Ok(())
    }

    #[test]
    fn rejects_duplicates_and_invalid_values() -> Result<(), AppError> {
        let storage = MemoryStorage::new();
        run(add_command("Alice", "08031234567", &[]), &storage)?;

        let duplicate = run(add_command("Alice", "08031234567", &[]), &storage);
        assert!(matches!(duplicate, Err(AppError::Validation(_))));

        let invalid = run(add_command("Alice", "not-a-phone", &[]), &storage);
        assert!(matches!(invalid, Err(AppError::Validation(_))));

        assert_eq!(storage.snapshot().len(), 1);
        Ok(())
    }

    #[test]
    fn delete_and_clear() -> Result<(), AppError> {
        let storage = MemoryStorage::new();
        run(add_command("Alice", "08031234567", &["work"]), &storage)?;
        run(add_command("Bob", "08037654321", &[]), &storage)?;

        let delete = Commands::Delete {
            name: "Alice".to_string(),
            phone: "08031234567".to_string(),
        };
        assert!(run(delete, &storage)?.contains("Person deleted successfully"));

        let missing = Commands::Delete {
            name: "Alice".to_string(),
            phone: "08031234567".to_string(),
        };
        assert!(matches!(run(missing, &storage), Err(AppError::NotFound(_))));

        run(Commands::Clear, &storage)?;
        assert!(storage.snapshot().is_empty());
        assert!(storage.snapshot().tags().is_empty());
        Ok(())
    }

    #[test]
    fn prints_path() -> Result<(), AppError> {
        let storage = MemoryStorage::new();
        assert_eq!(run(Commands::Path, &storage)?, "memory.txt\n");
        Ok(())
    }
}
