//! Payroll Engine for Korean labor management
//!
//! This crate computes gross pay, statutory deductions (income tax, local
//! income tax, national pension, health insurance, long-term care and
//! employment insurance) and net pay, normalizes monthly pay periods, and
//! counts leave days. An axum HTTP API exposes the calculations as JSON
//! endpoints.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
