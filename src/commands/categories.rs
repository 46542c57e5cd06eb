//! Categories command

use super::{Result, load_phrases};
use crate::config::AlmaConfig;
use crate::output;
use crate::selector::PhraseSelector;

/// List `todas` and every category present in the dataset
///
/// # Errors
/// Returns an error if the dataset cannot be loaded.
pub fn execute(config: &AlmaConfig, quiet: bool) -> Result<()> {
    let selector = PhraseSelector::new(load_phrases(config)?);
    for filter in selector.categories() {
        println!("{}", output::category_line(filter, false, quiet));
    }
    Ok(())
}
