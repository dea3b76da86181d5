// Live MIDI input events.
//
// Only the fields session scoring looks at are kept: what kind of message it
// was, its channel, and the key/velocity pair for note messages. A note-on
// with velocity 0 is the running-status idiom for note-off and is reported as
// `NoteOff`. Everything else (controllers, system messages) becomes `Other`
// with pitch and velocity zeroed.

use midly::MidiMessage;
use midly::live::LiveEvent;
use serde::{Deserialize, Serialize};

use crate::error::SessionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MidiInstruction {
    NoteOn,
    NoteOff,
    Other,
}

/// One timestamped MIDI event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MidiEvent {
    pub instruction: MidiInstruction,
    pub channel: u8,
    pub pitch: u8,
    pub velocity: u8,
    /// Arrival time in milliseconds on the host's clock.
    pub time_ms: u64,
}

impl MidiEvent {
    /// A channel-0 note-on.
    pub fn note_on(pitch: u8, velocity: u8, time_ms: u64) -> Self {
        MidiEvent {
            instruction: MidiInstruction::NoteOn,
            channel: 0,
            pitch,
            velocity,
            time_ms,
        }
    }

    /// Decode one complete raw MIDI message.
    pub fn from_bytes(bytes: &[u8], time_ms: u64) -> Result<Self, SessionError> {
        let event = match LiveEvent::parse(bytes)? {
            LiveEvent::Midi { channel, message } => {
                let (instruction, pitch, velocity) = match message {
                    MidiMessage::NoteOn { key, vel } if vel.as_int() == 0 => {
                        (MidiInstruction::NoteOff, key.as_int(), 0)
                    }
                    MidiMessage::NoteOn { key, vel } => {
                        (MidiInstruction::NoteOn, key.as_int(), vel.as_int())
                    }
                    MidiMessage::NoteOff { key, vel } => {
                        (MidiInstruction::NoteOff, key.as_int(), vel.as_int())
                    }
                    _ => (MidiInstruction::Other, 0, 0),
                };
                MidiEvent {
                    instruction,
                    channel: channel.as_int(),
                    pitch,
                    velocity,
                    time_ms,
                }
            }
            _ => MidiEvent {
                instruction: MidiInstruction::Other,
                channel: 0,
                pitch: 0,
                velocity: 0,
                time_ms,
            },
        };
        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_note_on() {
        let event = MidiEvent::from_bytes(&[0x91, 60, 100], 250).unwrap();
        assert_eq!(event.instruction, MidiInstruction::NoteOn);
        assert_eq!(event.channel, 1);
        assert_eq!(event.pitch, 60);
        assert_eq!(event.velocity, 100);
        assert_eq!(event.time_ms, 250);
    }

    #[test]
    fn zero_velocity_note_on_is_note_off() {
        let event = MidiEvent::from_bytes(&[0x90, 64, 0], 0).unwrap();
        assert_eq!(event.instruction, MidiInstruction::NoteOff);
        assert_eq!(event.pitch, 64);
    }

    #[test]
    fn decodes_note_off() {
        let event = MidiEvent::from_bytes(&[0x8F, 67, 40], 0).unwrap();
        assert_eq!(event.instruction, MidiInstruction::NoteOff);
        assert_eq!(event.channel, 15);
        assert_eq!(event.pitch, 67);
        assert_eq!(event.velocity, 40);
    }

    #[test]
    fn non_note_messages_are_other() {
        let cc = MidiEvent::from_bytes(&[0xB0, 7, 100], 0).unwrap();
        assert_eq!(cc.instruction, MidiInstruction::Other);
        assert_eq!(cc.pitch, 0);

        let clock = MidiEvent::from_bytes(&[0xF8], 0).unwrap();
        assert_eq!(clock.instruction, MidiInstruction::Other);
    }

    #[test]
    fn truncated_bytes_are_an_error() {
        assert!(MidiEvent::from_bytes(&[], 0).is_err());
        assert!(MidiEvent::from_bytes(&[0x90], 0).is_err());
    }
}
