mod classification;
mod helpers;
mod operations;
mod pagination;
