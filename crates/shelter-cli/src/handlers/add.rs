//! Add command handler.

use anyhow::Result;

use shelter_core::{Dog, NewDog};

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Arguments for the add command.
#[derive(Debug, Clone)]
pub struct AddArgs {
    pub name: String,
    pub age: i64,
    pub gender: String,
    pub breed: Option<String>,
    pub description: Option<String>,
}

/// Validate the arguments into a dog awaiting insertion.
fn build_new_dog(args: &AddArgs) -> Result<NewDog, CliError> {
    let invalid = |e: shelter_core::DogValidationError| CliError::Arguments(e.to_string());

    let mut dog = NewDog::new(&args.name, args.age, &args.gender).map_err(invalid)?;
    if let Some(description) = &args.description {
        dog = dog.with_description(description.clone()).map_err(invalid)?;
    }
    if let Some(breed) = &args.breed {
        dog = dog.with_breed(breed).map_err(invalid)?;
    }
    Ok(dog)
}

/// Insert a validated dog, creating its breed on first use.
///
/// The breed name on a `NewDog` is already trimmed, so it matches the
/// name `find_or_create` stores.
pub(crate) async fn insert_with_breed(ctx: &CliContext, dog: NewDog) -> Result<Dog, CliError> {
    if let Some(name) = dog.breed() {
        ctx.app().breeds().find_or_create(name).await?;
    }

    Ok(ctx.app().dogs().add(dog).await?)
}

/// Execute the add command.
pub async fn execute(ctx: &CliContext, args: AddArgs) -> Result<()> {
    let dog = build_new_dog(&args)?;
    let dog = insert_with_breed(ctx, dog).await?;
    println!("Added {dog}");
    Ok(())
}
