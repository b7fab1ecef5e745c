use std::path::Path;

use anyhow::Result;

use crate::{
    cli::{create_progress_bar, GenerateArgs},
    generate::GenerateOutcome,
    month::Month,
    session::Session,
};

use super::make_rng;

pub fn generate(file_path: &Path, args: &GenerateArgs) -> Result<String> {
    let mut session = Session::new(file_path);
    let mut rng = make_rng(args.seed);
    let pb = create_progress_bar(Month::ALL.len() as u64, "Generating data...".to_string());

    match session.generate(args.year, &mut rng, &pb)? {
        GenerateOutcome::Generated { year } => Ok(format!(
            "Data for {} generated in `{}`",
            year,
            file_path.display()
        )),
        GenerateOutcome::AlreadyExists => {
            pb.finish_and_clear();
            Ok(format!(
                "Data already generated in `{}`, use `regenerate` to replace it",
                file_path.display()
            ))
        }
    }
}

pub fn regenerate(file_path: &Path, args: &GenerateArgs) -> Result<String> {
    let mut session = Session::new(file_path);
    let mut rng = make_rng(args.seed);
    let pb = create_progress_bar(Month::ALL.len() as u64, "Regenerating data...".to_string());

    session.regenerate(args.year, &mut rng, &pb)?;

    Ok(format!(
        "Data for {} regenerated in `{}`",
        session.generated_year().unwrap_or_default(),
        session.data_file().display()
    ))
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod test {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn should_generate_once_then_refuse() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("weather.csv");
        let args = GenerateArgs {
            year: Some(2012),
            seed: Some(1),
        };

        let message = generate(&path, &args).unwrap();
        assert!(message.starts_with("Data for 2012 generated"));
        let first = fs::read(&path).unwrap();

        let message = generate(&path, &args).unwrap();
        assert!(message.starts_with("Data already generated"));
        assert_eq!(fs::read(&path).unwrap(), first);
    }

    #[test]
    fn should_regenerate_same_bytes_for_same_seed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("weather.csv");
        let args = GenerateArgs {
            year: Some(2016),
            seed: Some(99),
        };

        regenerate(&path, &args).unwrap();
        let first = fs::read(&path).unwrap();
        regenerate(&path, &args).unwrap();

        assert_eq!(fs::read(&path).unwrap(), first);
    }
}
