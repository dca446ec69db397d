mod grammar;
mod recovery;
