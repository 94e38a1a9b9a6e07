//! Source locations and their precedence

use std::fmt;

/// Where a config file came from.
///
/// The derived ordering is the precedence order: a greater location wins.
/// Variants are declared lowest rank first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Location {
    /// Conventional file under the user's home directory.
    HomeDirectory,
    /// Conventional file in the process working directory.
    CurrentDirectory,
    /// File named by the `KUBECONFIG` environment variable.
    EnvironmentVariable,
    /// File named explicitly on the command line.
    CommandLine,
}

impl Location {
    /// All locations, highest precedence first.
    pub const PRECEDENCE: [Location; 4] = [
        Location::CommandLine,
        Location::EnvironmentVariable,
        Location::CurrentDirectory,
        Location::HomeDirectory,
    ];

    /// Numeric rank; higher wins.
    pub fn rank(self) -> u8 {
        match self {
            Location::HomeDirectory => 0,
            Location::CurrentDirectory => 1,
            Location::EnvironmentVariable => 2,
            Location::CommandLine => 3,
        }
    }

    /// Whether a configured path that does not exist is skipped rather than
    /// reported. Only the command line names a file explicitly.
    pub fn tolerates_absence(self) -> bool {
        !matches!(self, Location::CommandLine)
    }

    pub fn label(self) -> &'static str {
        match self {
            Location::CommandLine => "command-line",
            Location::EnvironmentVariable => "environment",
            Location::CurrentDirectory => "current-directory",
            Location::HomeDirectory => "home-directory",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
