#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod offline;
pub mod program_file;
pub mod rest;

#[cfg(test)]
mod tests {
    pub mod data;
}
