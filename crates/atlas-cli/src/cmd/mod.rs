pub mod catalog;
pub mod directives;
pub mod run;
pub mod show;
