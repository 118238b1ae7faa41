use serde::{Deserialize, Serialize};

use crate::endpoint;

// structs and types

// a message from the contact form
//
// by the time one of these exists the form has already passed local validation
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

// messages

// deliver a contact message to the owner
//
// the receiving service decides how (email, queue, etc.); all we learn is whether it
// accepted the message
endpoint!(SendContact);

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SendContactReq {
    pub contact: ContactMessage,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SendContactResp {}
