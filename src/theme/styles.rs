//! Global CSS styles for the Valentine Card.
//!
//! Pink-to-purple backdrop, handwriting font for page text, and the two
//! one-shot animations whose `animationend` drives the stage changes.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* Backdrop */
  --rose: #f9a8d4;
  --violet: #a855f7;

  /* Ink */
  --ink-red: #991b1b;
  --ink-muted: #4b5563;
  --ink-light: #ffffff;

  /* Typography */
  --font-script: 'Dancing Script', cursive;
  --font-sans: system-ui, -apple-system, 'Segoe UI', sans-serif;

  --text-sm: 0.875rem;
  --text-lg: 1.125rem;

  /* Default durations, overridden inline from the card config */
  --flip-duration: 500ms;
  --leave-duration: 1000ms;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-sans);
  min-height: 100vh;
  overflow: hidden;
}

/* === Stage === */
.card-scene {
  position: relative;
  height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  background: linear-gradient(to bottom right, var(--rose), var(--violet));
  perspective: 1200px;
}

.card-image {
  max-width: 90vw;
  max-height: 90vh;
  cursor: pointer;
  user-select: none;
}

/* === Flip (closed card turning edge-on) === */
.card-closed {
  transform: rotateY(0deg);
}

.card-closed.flipping {
  animation: card-flip var(--flip-duration) ease-in-out forwards;
}

@keyframes card-flip {
  from { transform: rotateY(0deg); }
  to { transform: rotateY(90deg); }
}

/* === Opening transition (slide up, shrink, fade) === */
.card-leaving {
  animation: card-leave var(--leave-duration) ease-in-out forwards;
}

@keyframes card-leave {
  from { opacity: 1; transform: translateY(0) scale(1); }
  to { opacity: 0; transform: translateY(-50px) scale(0.8); }
}

/* === Final card content === */
.card-final {
  position: relative;
  width: 1200px;
  height: 900px;
  max-width: 100vw;
  max-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
}

.card-final__background {
  width: 100%;
  height: 100%;
  object-fit: contain;
}

.card-content {
  position: absolute;
  inset: 0;
  display: flex;
  flex-direction: column;
  align-items: center;
  justify-content: center;
  padding: 1.5rem 2rem;
  text-align: center;
  cursor: pointer;
}

.page-text {
  font-family: var(--font-script);
  font-size: var(--text-lg);
  font-weight: 600;
  color: var(--ink-red);
  max-width: 40%;
  padding-top: 0.75rem;
}

.page-image {
  max-width: 80%;
  max-height: 40%;
  object-fit: contain;
  margin: 1rem 0;
  padding-bottom: 1.25rem;
}

.page-hint {
  font-size: var(--text-sm);
  color: var(--ink-muted);
  margin-top: 1rem;
  padding-bottom: 5rem;
}

/* === Video === */
.video-frame {
  width: 100%;
  max-width: 50%;
  aspect-ratio: 16 / 9;
  padding-bottom: 12.5rem;
}

.video-frame iframe {
  width: 100%;
  height: 100%;
  border: 0;
}

/* === Mute Toggle === */
.mute-btn {
  position: absolute;
  top: 1rem;
  right: 1rem;
  z-index: 10;
  padding: 0.5rem;
  border: none;
  border-radius: 9999px;
  background: rgba(0, 0, 0, 0.5);
  color: var(--ink-light);
  cursor: pointer;
}

.mute-btn:focus {
  outline: none;
}

.mute-btn:focus-visible {
  box-shadow: 0 0 0 2px var(--ink-light);
}

.mute-icon {
  display: block;
  width: 1.5rem;
  height: 1.5rem;
}

/* === Startup failure === */
.card-error {
  color: var(--ink-light);
  font-size: var(--text-lg);
}

@media (prefers-reduced-motion: reduce) {
  .card-closed.flipping,
  .card-leaving {
    animation-duration: 1ms;
  }
}
"#;
