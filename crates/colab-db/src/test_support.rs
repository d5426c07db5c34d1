//! Shared test utilities for colab-db unit tests.
