//! List command implementation

use sklon_core::agreement::{currency_tokens, lexicon_words};
use sklon_core::protocol::{case_token, gender_token};
use sklon_core::{Case, Gender};

use super::ListCommands;
use crate::error::CliResult;

/// Execute a list subcommand.
pub fn execute(command: &ListCommands) -> CliResult<()> {
    match command {
        ListCommands::Cases => {
            for case in Case::ALL {
                println!("{} {:?}", case_token(case), case);
            }
        }
        ListCommands::Genders => {
            for gender in [Gender::Masculine, Gender::Feminine, Gender::Neuter] {
                println!("{} {:?}", gender_token(gender), gender);
            }
        }
        ListCommands::Currencies => {
            for token in currency_tokens() {
                println!("{token}");
            }
        }
        ListCommands::Nouns => {
            for word in lexicon_words() {
                println!("{word}");
            }
        }
    }
    Ok(())
}
