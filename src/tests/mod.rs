//! Internal unit tests, laid out like the module tree.

mod support;
