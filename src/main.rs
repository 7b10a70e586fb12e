use insight_deck::deck::{SlideBuilder, SlideSpec};
use std::process::ExitCode;

fn main() -> ExitCode {
    match SlideBuilder::default().write(&SlideSpec::key_insights()) {
        Ok(path) => {
            println!("Saved: {}", path.display());
            ExitCode::SUCCESS
        },
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        },
    }
}
