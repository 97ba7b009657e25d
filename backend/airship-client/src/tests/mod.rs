mod classify;
mod credentials;
mod operation;
mod support;
