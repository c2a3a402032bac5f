mod demo;
mod parse;
mod util;
