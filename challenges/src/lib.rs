//! qforge challenge suite
//!
//! Solutions to a series of small quantum-computing exercises, each one a
//! handful of circuits run on the [`qforge_sim`] device and a little
//! classical post-processing or optimization:
//!
//! - **Games**: Deutsch-Jozsa, the tardigrade masquerade, CHSH, the
//!   Elitzur-Vaidman bomb tester, find-the-car
//! - **Chemistry**: measurement grouping, triple Givens rotations, ground
//!   and excited states of H2
//! - **Machine learning**: an Ising phase classifier and a QRAM loader
//!
//! Every exercise implements [`runners::Exercise`]: it parses one
//! comma-separated line and produces an output whose `Display` is the
//! expected answer line.
//!
//! ```rust
//! use qforge_challenges::runners::{Exercise, OrderMattersRunner};
//!
//! let out = OrderMattersRunner.solve("0.5,0.8").unwrap();
//! assert_eq!(out.to_string().len(), 8);
//! ```

pub mod circuits;
pub mod error;
pub mod format;
pub mod input;
pub mod optimizers;
pub mod problems;
pub mod runners;

pub use error::{ChallengeError, ChallengeResult, InputError};

use indicatif::{ProgressBar, ProgressStyle};

/// Create a progress bar for long optimisations, hidden unless `visible`.
pub fn create_progress_bar(len: u64, message: &str, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(len);
    let style = ProgressStyle::with_template(
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
    )
    .map(|s| s.progress_chars("#>-"))
    .unwrap_or_else(|_| ProgressStyle::default_bar());
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb
}
