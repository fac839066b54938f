mod binary;
mod curation;
mod passphrase;
mod password;
