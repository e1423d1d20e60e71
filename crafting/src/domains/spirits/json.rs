use crate::spirits::{Persistable, Spirit, SpiritBody, SpiritDomain};
use serde_json::{json, Value};

impl SpiritDomain {
    /// Simple spirits are sent as bare serial integer.
    pub fn spirit_client_json(&self, spirit: Spirit) -> Value {
        let id = match spirit {
            Spirit::Simple(serial_integer) => return json!(serial_integer),
            Spirit::Complex(id) => id,
        };
        let spirit = match self.spirits.get(&id) {
            Some(spirit) => spirit,
            None => return json!({ "id": id }),
        };
        match &spirit.body {
            SpiritBody::Player(player) => json!({
                "classId": spirit.body.class_id(),
                "id": id,
                "username": player.username,
            }),
            _ => json!({
                "classId": spirit.body.class_id(),
                "id": id,
            }),
        }
    }
}
