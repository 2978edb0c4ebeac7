//! Terminal rendering of the dashboard.

use colored::Colorize;
use pipeline::{AggregateResult, COOKING_TIME_PRESETS, CUISINE_PRESETS, DIET_PRESETS};
use recipe_data::{Recipe, RecipeCatalog};

/// Tags joined with ", ", or "None" when there are none
pub fn format_tags(tags: &[String]) -> String {
    if tags.is_empty() {
        "None".to_string()
    } else {
        tags.join(", ")
    }
}

/// The most common diet, or "N/A"
pub fn diet_label(diet: Option<&str>) -> &str {
    diet.unwrap_or("N/A")
}

/// Print the summary statistics block
pub fn print_summary(stats: &AggregateResult) {
    println!("{}", "Recipe Dashboard".bold().blue());
    println!("{}Total Recipes: {}", "• ".green(), stats.count);
    println!("{}Average Calories: {:.2}", "• ".green(), stats.average_calories);
    println!("{}Median Calories: {:.2}", "• ".green(), stats.median_calories);
    println!(
        "{}Most Common Diet: {}",
        "• ".green(),
        diet_label(stats.most_common_diet.as_deref())
    );
    println!(
        "{}Average Cooking Time: {:.2} minutes",
        "• ".green(),
        stats.average_cooking_time
    );
}

/// Print one card per recipe
pub fn print_cards(recipes: &[Recipe]) {
    for (rank, recipe) in recipes.iter().enumerate() {
        println!();
        println!("{}. {}", (rank + 1).to_string().green(), recipe.title.bold());
        if !recipe.image.is_empty() {
            println!("   {}", recipe.image.dimmed());
        }
        println!("   Calories: {:.2}", recipe.calories);
        println!("   Cooking Time: {} minutes", recipe.ready_in_minutes);
        println!("   Diets: {}", format_tags(&recipe.diets));
        println!("   Cuisines: {}", format_tags(&recipe.cuisines));
    }
}

/// Print the filter values a user can choose from
pub fn print_options(catalog: &RecipeCatalog) {
    println!("{}", "Diets".bold().blue());
    println!("  presets: {}", DIET_PRESETS.join(", "));
    println!("  in catalog: {}", join_or_none(&catalog.diets()));

    println!("{}", "Cuisines".bold().blue());
    println!("  presets: {}", CUISINE_PRESETS.join(", "));
    println!("  in catalog: {}", join_or_none(&catalog.cuisines()));

    println!("{}", "Cooking times".bold().blue());
    for (label, bucket) in COOKING_TIME_PRESETS {
        println!("  {:<8} {}", bucket.to_string().cyan(), label);
    }
}

/// Report the records that were excluded while loading.
///
/// Writes to stderr; stdout carries only the view.
pub fn print_skipped(catalog: &RecipeCatalog) {
    if catalog.skipped().is_empty() {
        return;
    }
    eprintln!(
        "{}",
        format!("{} recipes excluded:", catalog.skipped().len()).yellow()
    );
    for skipped in catalog.skipped() {
        eprintln!("  - {} ({}): {}", skipped.title, skipped.id, skipped.reason);
    }
}

fn join_or_none(tags: &[&str]) -> String {
    if tags.is_empty() {
        "None".to_string()
    } else {
        tags.join(", ")
    }
}
