//! One module per subcommand. Each exposes a clap `Args` struct and a
//! `run` function returning `anyhow::Result`.

pub mod budget;
pub mod convert;
pub mod documents;
pub mod plan;
pub mod routes;
pub mod savings;
