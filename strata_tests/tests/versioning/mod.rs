mod compat;
mod inheritance;
