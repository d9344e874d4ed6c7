// Timer-Dienst und Blink-Laufzeit über Embassy Signals
//
// Der Controller ruft `arm`/`spawn` innerhalb seines Mutex auf. Die
// Adapter legen nur ein Kommando in das Signal der Steckdose; der
// zugehörige Task (auto_off_task bzw. blink_task) holt es ab.
// Ein neues Kommando überschreibt ein noch nicht abgeholtes.

use outlet_core::{AutoOffTimer, BlinkHandle, BlinkRuntime, TimerTicket};

use crate::{BlinkCommand, BlinkSignal, TimerCommand, TimerSignal};

/// Auto-Off-Timer einer Steckdose
pub struct SignalTimer {
    commands: &'static TimerSignal,
}

impl SignalTimer {
    pub fn new(commands: &'static TimerSignal) -> Self {
        Self { commands }
    }
}

impl AutoOffTimer for SignalTimer {
    fn arm(&mut self, ticket: TimerTicket, after_ms: u64) {
        self.commands.signal(TimerCommand::Arm { ticket, after_ms });
    }

    fn disarm(&mut self) {
        self.commands.signal(TimerCommand::Disarm);
    }
}

/// Blink-Laufzeit einer Steckdose
pub struct SignalBlink {
    commands: &'static BlinkSignal,
}

impl SignalBlink {
    pub fn new(commands: &'static BlinkSignal) -> Self {
        Self { commands }
    }
}

impl BlinkRuntime for SignalBlink {
    fn spawn(&mut self, handle: BlinkHandle) {
        self.commands.signal(BlinkCommand::Start(handle));
    }

    fn cancel(&mut self, handle: BlinkHandle) {
        // Das Handle ist im Controller bereits ungültig; das Kommando weckt
        // den Task nur vorzeitig auf.
        self.commands.signal(BlinkCommand::Cancel(handle));
    }
}
