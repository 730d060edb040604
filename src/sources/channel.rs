use tokio::runtime::{Handle, RuntimeFlavor};
use tokio::sync::mpsc;
use tokio::task;

use crate::Seq;

/// One-shot source over a tokio mpsc receiver. See [`from_receiver`].
#[derive(Debug)]
pub struct FromReceiver<T> {
    rx: mpsc::Receiver<T>,
}

/// Yields values received on `rx` until every sender is dropped.
///
/// Driving blocks the calling thread between values. Prefer a plain thread or
/// `tokio::task::spawn_blocking`; inside a multi-thread runtime the wait goes
/// through `block_in_place`, so the runtime keeps making progress. A drive that
/// stops early leaves the receiver open; the next drive continues with the
/// following value.
///
/// # Panics
/// When driven from async code on a current-thread runtime: waiting there
/// would stall the only thread that can deliver the values.
pub fn from_receiver<T>(rx: mpsc::Receiver<T>) -> FromReceiver<T> {
    FromReceiver { rx }
}

impl<T> FromReceiver<T> {
    /// Returns the receiver, closing nothing.
    pub fn into_inner(self) -> mpsc::Receiver<T> {
        self.rx
    }
}

impl<T> Seq for FromReceiver<T> {
    type Item = T;

    fn drive<C>(&mut self, mut consumer: C)
    where
        C: FnMut(T) -> bool,
    {
        let rx = &mut self.rx;
        let mut pump = move || {
            while let Some(x) = rx.blocking_recv() {
                if !consumer(x) {
                    return;
                }
            }
        };
        match Handle::try_current().map(|h| h.runtime_flavor()) {
            Ok(RuntimeFlavor::MultiThread) => task::block_in_place(pump),
            _ => pump(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use tokio::sync::mpsc;

    use crate::prelude::*;

    #[test]
    fn test_receiver_drains_until_senders_drop() {
        let (tx, rx) = mpsc::channel(1);
        let producer = thread::spawn(move || {
            for i in 0..5 {
                tx.blocking_send(i).unwrap();
            }
        });

        let got = from_receiver(rx).to_vec();
        producer.join().unwrap();
        assert_eq!(got, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_receiver_resumes_after_stop() {
        let (tx, rx) = mpsc::channel(8);
        for i in 1..=4 {
            tx.try_send(i).unwrap();
        }
        drop(tx);

        let mut seq = from_receiver(rx);
        assert_eq!((&mut seq).take(1).to_vec(), vec![1]);
        assert_eq!((&mut seq).to_vec(), vec![2, 3, 4]);
        assert!(seq.to_vec().is_empty());
    }

    #[tokio::test]
    async fn test_receiver_inside_spawn_blocking() {
        let (tx, rx) = mpsc::channel(1);
        let reader = tokio::task::spawn_blocking(move || from_receiver(rx).map(|x: i32| x * 10).to_vec());

        for i in 1..=3 {
            tx.send(i).await.unwrap();
        }
        drop(tx);

        assert_eq!(reader.await.unwrap(), vec![10, 20, 30]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_receiver_driven_from_async_code() {
        let (tx, rx) = mpsc::channel(1);
        let sender = tokio::spawn(async move {
            for i in 1..=3 {
                tx.send(i).await.unwrap();
            }
        });
        assert_eq!(from_receiver(rx).to_vec(), vec![1, 2, 3]);
        sender.await.unwrap();

        let (tx, rx) = mpsc::channel(1);
        let reader = tokio::spawn(async move { from_receiver(rx).count() });
        for i in 0..4 {
            tx.send(i).await.unwrap();
        }
        drop(tx);
        assert_eq!(reader.await.unwrap(), 4);
    }
}
