pub mod advocates;
