use colored::Colorize;

use crate::paths::RepoPaths;
use crate::prompt::CallMode;

/// Print the confirmation summary and the manual build step that follows.
pub fn summary(repo: &RepoPaths, source: &str, header: &str, mode: CallMode) {
    println!();
    println!("{} parser into Android build", "Wired".green().bold());
    println!("  source: {}", source);
    println!("  header: {}", header);
    println!("  call:   {}", mode.expression());
    println!();
    println!("Next steps:");
    println!("  cd {}", repo.root.join("android").display());
    println!("  ./gradlew assembleDebug");
}
