use tokio::sync::mpsc;
use tokio::time::Instant;

use super::*;
use crate::domain::models::TerminalSession;

fn drain(rx: &mut mpsc::UnboundedReceiver<Event>) -> Vec<Event> {
    let mut events = vec![];
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

fn render(events: &[Event]) -> String {
    let mut session = TerminalSession::default();
    for event in events {
        if let Event::Output(output) = event {
            session.apply(output);
        }
    }
    session.rendered_text().to_string()
}

#[tokio::test]
async fn it_types_lines_with_a_trailing_break() {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let job = RenderJob::new(vec![
        Segment::line("$ about"),
        Segment::line("Ali — Engineer"),
        Segment::blank(),
    ]);

    Renderer::new(Duration::ZERO)
        .animate(&job, &event_tx)
        .await
        .unwrap();

    let events = drain(&mut event_rx);
    assert_eq!(render(&events), "$ about\nAli — Engineer\n\n");
}

#[tokio::test]
async fn it_emits_one_event_per_character() {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let job = RenderJob::new(vec![Segment::line("héllo")]);

    Renderer::new(Duration::ZERO)
        .animate(&job, &event_tx)
        .await
        .unwrap();

    let outputs = drain(&mut event_rx)
        .into_iter()
        .filter_map(|event| match event {
            Event::Output(output) => Some(output),
            _ => None,
        })
        .collect::<Vec<Output>>();

    assert_eq!(
        outputs,
        vec![
            Output::Char('h'),
            Output::Char('é'),
            Output::Char('l'),
            Output::Char('l'),
            Output::Char('o'),
            Output::LineBreak,
        ]
    );
}

#[tokio::test]
async fn it_clears_in_sequence() {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let job = RenderJob::new(vec![Segment::line("$ clear"), Segment::Clear]);

    Renderer::new(Duration::ZERO)
        .animate(&job, &event_tx)
        .await
        .unwrap();

    let events = drain(&mut event_rx);
    assert!(matches!(events.last(), Some(Event::Output(Output::Clear))));
    assert_eq!(render(&events), "");
}

#[tokio::test(start_paused = true)]
async fn it_paces_characters_by_the_typing_delay() {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let job = RenderJob::new(vec![Segment::line("abcd")]);
    let started = Instant::now();

    Renderer::new(Duration::from_millis(50))
        .animate(&job, &event_tx)
        .await
        .unwrap();

    assert!(started.elapsed() >= Duration::from_millis(200));
    assert_eq!(render(&drain(&mut event_rx)), "abcd\n");
}

#[tokio::test(start_paused = true)]
async fn it_shows_partial_output_while_typing() {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let (job_tx, mut job_rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        Renderer::new(Duration::from_millis(50))
            .start(&mut job_rx, &event_tx)
            .await
    });
    job_tx
        .send(RenderJob::new(vec![Segment::line("summary")]))
        .unwrap();

    let mut session = TerminalSession::default();
    match event_rx.recv().await {
        Some(Event::Output(output)) => session.apply(&output),
        other => panic!("unexpected event {other:?}"),
    }
    assert_eq!(session.rendered_text(), "s");

    loop {
        match event_rx.recv().await {
            Some(Event::Output(output)) => session.apply(&output),
            Some(Event::RenderFinished) => break,
            other => panic!("unexpected event {other:?}"),
        }
    }
    assert_eq!(session.rendered_text(), "summary\n");
}

#[tokio::test]
async fn it_never_interleaves_queued_jobs() {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let (job_tx, mut job_rx) = mpsc::unbounded_channel();

    job_tx
        .send(RenderJob::new(vec![Segment::line("$ about"), Segment::line("first")]))
        .unwrap();
    job_tx
        .send(RenderJob::new(vec![Segment::line("$ summary"), Segment::line("second")]))
        .unwrap();
    drop(job_tx);

    Renderer::new(Duration::ZERO)
        .start(&mut job_rx, &event_tx)
        .await
        .unwrap();

    let events = drain(&mut event_rx);
    let finished_at = events
        .iter()
        .enumerate()
        .filter(|(_, event)| matches!(event, Event::RenderFinished))
        .map(|(index, _)| index)
        .collect::<Vec<usize>>();

    assert_eq!(finished_at.len(), 2);
    assert_eq!(render(&events[..finished_at[0]]), "$ about\nfirst\n");
    assert_eq!(render(&events), "$ about\nfirst\n$ summary\nsecond\n");
}
