pub mod atera;
