//! Fixed user-facing text for the console shell.

use insured_core::Validation;

pub const HEADLINE: &str = "--------------------------\nInsured persons registry\n--------------------------";
pub const MAIN_MENU: &str = "Choose an action:\n\
1 - Add a new insured person\n\
2 - List all insured persons\n\
3 - Search for an insured person\n\
4 - Delete an insured person\n\
5 - Quit";
pub const MENU_PROMPT: &str = "Choice: ";
pub const MENU_INVALID: &str = "Invalid choice. Enter a number from 1 to 5.";
pub const RETRY_PROMPT: &str = "Enter again: ";

pub const ADD_TITLE: &str = "Add a new insured person\n------------------------";
pub const SEARCH_TITLE: &str = "Search for an insured person\n----------------------------";
pub const FIRST_NAME_PROMPT: &str = "First name: ";
pub const LAST_NAME_PROMPT: &str = "Last name: ";
pub const AGE_PROMPT: &str = "Age: ";
pub const PHONE_PROMPT: &str = "Phone number: ";
pub const RECORD_ADDED: &str = "New record added";

pub const NO_RECORDS: &str = "No records found.";

pub const DELETE_ID_PROMPT: &str = "Id of the insured person to delete: ";
pub const DELETE_ID_NOT_FOUND: &str = "Error! No record with that id.";
pub const DELETE_CONFIRM: &str = "Do you really want to delete this record?";
pub const YES_NO_PROMPT: &str = "yes/no: ";
pub const DELETE_CONFIRM_INVALID: &str =
    "Error! Type \"yes\" to delete the record or \"no\" to cancel.";
pub const RECORD_DELETED: &str = "Record deleted.";
pub const DELETE_CANCELLED: &str = "Nothing was deleted.";

/// Text shown for a rejected field.
pub fn validation_message(outcome: Validation) -> &'static str {
    match outcome {
        Validation::Correct => "",
        Validation::NameEmpty => "Error! The value must not be empty.",
        Validation::NameNotLetter => {
            "Error! The value must not contain spaces, digits or other special characters."
        }
        Validation::PhoneTooShort => "Error! A phone number must have at least 9 characters.",
        Validation::PhoneShortFormNotDigits => {
            "Error! A 9-character phone number may contain only digits 0 - 9."
        }
        Validation::PhoneLongFormNotDigits => {
            "Error! Only a leading + is allowed for the country code, all other characters must be digits 0 - 9."
        }
        Validation::AgeIncorrect => "Error! The age must be a whole number from 0 to 100.",
    }
}
