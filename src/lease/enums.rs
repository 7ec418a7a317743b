pub mod lease_outcome;
