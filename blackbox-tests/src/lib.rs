//! Black-box consumer of the public `kinship` API. See `tests/`.
