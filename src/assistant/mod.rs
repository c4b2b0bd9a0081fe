//! Asistente flotante: conversación, mensajes de contexto y respuestas
//! diferidas. Las respuestas salen de las tablas de [`rules`] y [`hints`].

pub mod hints;
pub mod rules;

pub use rules::{HintContext, resolve};

use crate::scheduler::DeferredQueue;
use rand::Rng;

pub const GREETING: &str = "Hi! I'm your quiz assistant. How can I help you?";

pub const INTRO_CONTEXT: &str =
    "You're about to start a quiz. I can help explain how the quiz works if you have questions.";
pub const RESULTS_CONTEXT: &str =
    "You've completed the quiz. Need any clarification about your results?";
pub const CAROUSEL_CONTEXT: &str = "You're browsing our quiz selection. I can help you decide which quiz might be most interesting for you.";
pub const QUESTION_CONTEXT: &str =
    "If you need a hint or have a question about this quiz question, just ask me!";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub text: String,
}

impl Message {
    fn assistant(text: &str) -> Self {
        Self {
            role: Role::Assistant,
            text: text.to_owned(),
        }
    }
}

#[derive(Debug)]
pub struct Assistant {
    pub open: bool,
    pub input: String,
    messages: Vec<Message>,
    replies: DeferredQueue<String>,
    reply_delay: f64,
}

impl Assistant {
    pub fn new(reply_delay: f64) -> Self {
        Self {
            open: false,
            input: String::new(),
            messages: vec![Message::assistant(GREETING)],
            replies: DeferredQueue::default(),
            reply_delay,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Hay al menos una respuesta en camino
    pub fn is_thinking(&self) -> bool {
        !self.replies.is_empty()
    }

    pub fn next_due(&self) -> Option<f64> {
        self.replies.next_due()
    }

    /// Se llama cuando cambia la pantalla o la pregunta actual.
    pub fn on_context(&mut self, ctx: &HintContext) {
        let Some(content) = context_message(ctx) else {
            return;
        };
        // el de pregunta solo una vez por conversación
        if content == QUESTION_CONTEXT && self.messages.iter().any(|m| m.text == QUESTION_CONTEXT) {
            return;
        }
        // solo detrás de un mensaje del asistente, y sin repetir el último
        let append = self
            .messages
            .last()
            .is_some_and(|last| last.role == Role::Assistant && last.text != content);
        if append {
            self.messages.push(Message::assistant(content));
        }
    }

    /// La respuesta se calcula con el contexto del momento del envío y se
    /// entrega `reply_delay` segundos después. Devuelve `false` si el texto está vacío.
    pub fn send<R: Rng + ?Sized>(
        &mut self,
        text: &str,
        ctx: &HintContext,
        rng: &mut R,
        now: f64,
    ) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        self.messages.push(Message {
            role: Role::User,
            text: text.to_owned(),
        });
        let reply = resolve(text, ctx, rng);
        self.replies.push(reply, now, self.reply_delay);
        true
    }

    /// Añade las respuestas vencidas; devuelve cuántas llegaron.
    pub fn poll(&mut self, now: f64) -> usize {
        let ready = self.replies.drain_ready(now);
        let count = ready.len();
        self.messages.extend(ready.into_iter().map(|text| Message {
            role: Role::Assistant,
            text,
        }));
        count
    }

    /// Vuelve al saludo y descarta respuestas pendientes
    pub fn reset(&mut self) {
        self.messages = vec![Message::assistant(GREETING)];
        self.replies.clear();
        self.input.clear();
    }
}

pub fn context_message(ctx: &HintContext) -> Option<&'static str> {
    if ctx.is_intro {
        Some(INTRO_CONTEXT)
    } else if ctx.is_results {
        Some(RESULTS_CONTEXT)
    } else if ctx.is_carousel {
        Some(CAROUSEL_CONTEXT)
    } else if ctx.current_question.is_some() {
        Some(QUESTION_CONTEXT)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuizQuestion;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn question(id: u32) -> QuizQuestion {
        QuizQuestion {
            id,
            prompt: "What is the capital of France?".into(),
            options: vec!["Paris".into(), "Rome".into()],
            correct_option: 0,
        }
    }

    fn intro() -> HintContext<'static> {
        HintContext {
            is_intro: true,
            ..Default::default()
        }
    }

    #[test]
    fn starts_with_greeting() {
        let a = Assistant::new(1.0);
        assert_eq!(a.messages().len(), 1);
        assert_eq!(a.messages()[0].text, GREETING);
        assert!(!a.is_thinking());
    }

    #[test]
    fn context_messages_do_not_repeat() {
        let mut a = Assistant::new(1.0);
        a.on_context(&intro());
        a.on_context(&intro());
        assert_eq!(a.messages().len(), 2);
        assert_eq!(a.messages()[1].text, INTRO_CONTEXT);
    }

    #[test]
    fn question_context_only_once() {
        let mut a = Assistant::new(1.0);
        let (q1, q2) = (question(1), question(2));
        a.on_context(&HintContext { current_question: Some(&q1), ..Default::default() });
        a.on_context(&HintContext { is_carousel: true, ..Default::default() });
        a.on_context(&HintContext { current_question: Some(&q2), ..Default::default() });
        let count = a.messages().iter().filter(|m| m.text == QUESTION_CONTEXT).count();
        assert_eq!(count, 1);
    }

    #[test]
    fn context_message_dropped_after_user_message() {
        let mut a = Assistant::new(1.0);
        let mut rng = StdRng::seed_from_u64(3);
        a.send("hello", &HintContext::default(), &mut rng, 0.0);
        a.on_context(&intro());
        assert_eq!(a.messages().last().map(|m| m.role), Some(Role::User));
    }

    #[test]
    fn replies_arrive_after_delay_in_order() {
        let mut a = Assistant::new(1.0);
        let mut rng = StdRng::seed_from_u64(3);
        let q = question(1);
        let in_q = HintContext { current_question: Some(&q), ..Default::default() };

        assert!(a.send("hint please", &in_q, &mut rng, 0.0));
        assert!(a.send("the correct answer?", &in_q, &mut rng, 0.3));
        assert!(a.is_thinking());
        assert_eq!(a.poll(0.9), 0);
        assert_eq!(a.poll(1.1), 1);
        assert_eq!(a.poll(1.3), 1);
        assert!(!a.is_thinking());

        let texts: Vec<&str> = a.messages().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts[1], "hint please");
        assert_eq!(texts[2], "the correct answer?");
        assert!(texts[3].contains("European cities"));
        assert_eq!(texts[4], rules::REFUSE_ANSWER);
    }

    #[test]
    fn blank_input_is_ignored() {
        let mut a = Assistant::new(1.0);
        let mut rng = StdRng::seed_from_u64(3);
        assert!(!a.send("   ", &HintContext::default(), &mut rng, 0.0));
        assert_eq!(a.messages().len(), 1);
    }

    #[test]
    fn reset_drops_pending_replies() {
        let mut a = Assistant::new(1.0);
        let mut rng = StdRng::seed_from_u64(3);
        a.send("hi", &HintContext::default(), &mut rng, 0.0);
        a.reset();
        assert_eq!(a.poll(5.0), 0);
        assert_eq!(a.messages().len(), 1);
    }
}
