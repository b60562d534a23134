#![deny(unsafe_code)]

pub mod knowledge_base;

pub use crate::knowledge_base::{
    GUIDELINE_ORGANIZATIONS, profile_by_key, profile_for, profiles,
};
