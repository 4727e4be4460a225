use crate::areas::repository::Repository;
use crate::error::{Error, Result};

mod areas;
mod artifacts;
mod commands;
mod error;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    // Every outcome, including failures, is a single line on stdout and a
    // zero exit code.
    if let Err(err) = run(&args) {
        println!("{err}");
    }
}

fn run(args: &[String]) -> Result<()> {
    let Some(command) = args.first() else {
        return Err(Error::EmptyCommand);
    };

    let cwd = std::env::current_dir()?;
    let mut repository = Repository::new(cwd.into_boxed_path(), Box::new(std::io::stdout()));

    if command.as_str() != "init" && !repository.is_initialized() {
        return Err(Error::NotInitialized);
    }

    match command.as_str() {
        "init" => {
            expect_operands(args, 1)?;
            repository.init()
        }
        "add" => {
            expect_operands(args, 2)?;
            repository.add(&args[1])
        }
        "commit" => {
            expect_operands(args, 2)?;
            repository.commit(&args[1])
        }
        "rm" => {
            expect_operands(args, 2)?;
            repository.rm(&args[1])
        }
        "log" => {
            expect_operands(args, 1)?;
            repository.log()
        }
        "global-log" => {
            expect_operands(args, 1)?;
            repository.global_log()
        }
        "find" => {
            expect_operands(args, 2)?;
            repository.find(&args[1])
        }
        "status" => {
            expect_operands(args, 1)?;
            repository.status()
        }
        "restore" => match args {
            [_, separator, filename] if separator.as_str() == "--" => {
                repository.restore_from_head(filename)
            }
            [_, fragment, separator, filename] if separator.as_str() == "--" => {
                repository.restore_from_commit(fragment, filename)
            }
            _ => Err(Error::IncorrectOperands),
        },
        "branch" => {
            expect_operands(args, 2)?;
            repository.branch(&args[1])
        }
        "switch" => {
            expect_operands(args, 2)?;
            repository.switch(&args[1])
        }
        "rm-branch" => {
            expect_operands(args, 2)?;
            repository.rm_branch(&args[1])
        }
        "reset" => {
            expect_operands(args, 2)?;
            repository.reset(&args[1])
        }
        "merge" => {
            expect_operands(args, 2)?;
            repository.merge(&args[1])
        }
        _ => Err(Error::UnknownCommand),
    }
}

fn expect_operands(args: &[String], expected: usize) -> Result<()> {
    if args.len() != expected {
        return Err(Error::IncorrectOperands);
    }

    Ok(())
}
