//! Tests for the onboarding service.
