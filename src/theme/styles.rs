//! Global CSS styles for the card.
//!
//! Soft romantic night palette; every animation the effect components ride
//! on lives here.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* NIGHT (Backgrounds) */
  --midnight: #1a1333;
  --midnight-deep: #120d26;
  --midnight-border: #2c2150;

  /* BLUSH (Primary accents) */
  --blush: #FFB6C1;
  --pink: #FFC0CB;
  --rose-glow: rgba(255, 182, 193, 0.35);

  /* LAVENDER (Secondary accents) */
  --orchid: #DDA0DD;
  --lavender: #E6E6FA;

  /* CREAM (Highlights, titles) */
  --cream: #FFF8DC;
  --gold: #f4d58d;

  /* TEXT */
  --text-primary: #fdf6f8;
  --text-secondary: rgba(253, 246, 248, 0.75);
  --text-muted: rgba(253, 246, 248, 0.5);

  /* Typography */
  --font-serif: 'Cormorant Garamond', Georgia, serif;
  --font-body: 'Quicksand', 'Segoe UI', sans-serif;

  /* Type Scale */
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.25rem;
  --text-xl: 1.75rem;
  --text-2xl: 2.5rem;
  --text-3xl: 3.25rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
  --transition-slow: 500ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  scroll-behavior: smooth;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-body);
  background: var(--midnight);
  color: var(--text-primary);
  line-height: 1.7;
}

.card {
  outline: none;
}

/* === Sections === */
.card-section {
  position: relative;
  min-height: 100vh;
  display: flex;
  align-items: center;
  justify-content: center;
  overflow: hidden;
  padding: 4rem 1.5rem;
}

.section-inner {
  position: relative;
  z-index: 2;
  width: 100%;
  max-width: 640px;
  text-align: center;
}

/* Per-section washes, darkest at the edges of the card */
.theme-welcome    { background: radial-gradient(circle at 50% 30%, #2b1e4d, var(--midnight)); }
.theme-apology    { background: linear-gradient(180deg, var(--midnight), var(--midnight-deep)); }
.theme-feelings   { background: radial-gradient(circle at 20% 80%, #251a45, var(--midnight)); }
.theme-importance { background: linear-gradient(180deg, var(--midnight-deep), var(--midnight)); }
.theme-birthday   { background: radial-gradient(circle at 50% 20%, #33205a, var(--midnight)); }
.theme-wishes     { background: linear-gradient(180deg, var(--midnight), #1d1440); }
.theme-promises   { background: radial-gradient(circle at 80% 30%, #251a45, var(--midnight)); }
.theme-choice     { background: linear-gradient(180deg, #1d1440, var(--midnight-deep)); }
.theme-surprise   { background: radial-gradient(circle at 50% 50%, #33205a, var(--midnight-deep)); }
.theme-finale     { background: linear-gradient(180deg, var(--midnight-deep), #0d0a1c); }

/* === Typography === */
.page-title {
  font-family: var(--font-serif);
  font-size: var(--text-3xl);
  font-weight: 400;
  color: var(--cream);
  text-shadow: 0 0 30px var(--rose-glow);
  letter-spacing: 0.06em;
  animation: fadeInUp 0.8s ease both;
}

.section-title {
  font-family: var(--font-serif);
  font-size: var(--text-2xl);
  font-weight: 400;
  color: var(--blush);
  margin-bottom: 1rem;
  text-shadow: 0 0 20px var(--rose-glow);
}

.section-subtitle {
  color: var(--text-muted);
  font-size: var(--text-sm);
  margin-bottom: 2rem;
}

.recipient-line {
  font-family: var(--font-serif);
  font-style: italic;
  font-size: var(--text-lg);
  color: var(--orchid);
  margin: 0.5rem 0 1.5rem;
}

.greeting-line {
  font-size: var(--text-lg);
  color: var(--text-secondary);
  margin: 0.4rem 0;
  animation: fadeInUp 0.8s ease both;
}

.greeting-line:nth-child(2) { animation-delay: 0.3s; }

.welcome-subtitle {
  margin-top: 2.5rem;
  color: var(--text-muted);
}

.scroll-hint {
  margin-top: 1rem;
  font-size: var(--text-xl);
  color: var(--blush);
  animation: bob 2s ease-in-out infinite;
}

.signature {
  font-family: var(--font-serif);
  font-style: italic;
  color: var(--gold);
  margin-top: 1.5rem;
}

/* === Typewriter === */
.typed-lines {
  text-align: left;
  margin: 0 auto 2rem;
  max-width: 520px;
}

.typewriter {
  display: flex;
  align-items: baseline;
  gap: 0.5rem;
  margin: 0.75rem 0;
  min-height: 1.7em;
}

.typing-text {
  color: var(--text-secondary);
}

.typing-text::after {
  content: '|';
  color: var(--blush);
  animation: blink 1s step-end infinite;
}

.typing-text.typing-complete::after {
  content: '';
}

.replay-btn {
  background: none;
  border: none;
  color: var(--text-muted);
  cursor: pointer;
  font-size: var(--text-base);
  transition: color var(--transition-fast), transform var(--transition-fast);
}

.replay-btn:hover {
  color: var(--blush);
  transform: rotate(180deg);
}

/* === Buttons === */
.ripple-button {
  position: relative;
  overflow: hidden;
  font-family: var(--font-body);
  cursor: pointer;
}

.reveal-btn {
  background: transparent;
  border: 1px solid var(--orchid);
  border-radius: 999px;
  color: var(--lavender);
  padding: 0.6rem 1.6rem;
  font-size: var(--text-base);
  transition: all var(--transition-normal);
}

.reveal-btn:hover {
  background: var(--rose-glow);
  border-color: var(--blush);
  transform: translateY(-2px);
}

.ripple {
  position: absolute;
  width: 12px;
  height: 12px;
  border-radius: 50%;
  background: rgba(255, 255, 255, 0.5);
  transform: translate(-50%, -50%);
  pointer-events: none;
  animation: ripple 0.6s ease-out forwards;
}

/* === Reveal blocks === */
.extra-message {
  margin-top: 2rem;
  padding: 1.5rem;
  border: 1px solid var(--midnight-border);
  border-radius: 16px;
  background: rgba(255, 182, 193, 0.06);
  animation: fadeInUp 0.8s ease both;
}

.extra-message h3 {
  font-family: var(--font-serif);
  color: var(--gold);
  margin-bottom: 0.75rem;
}

.extra-message p {
  color: var(--text-secondary);
  margin: 0.5rem 0;
}

/* === Tap cards === */
.card-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
  gap: 1rem;
}

.tap-card {
  position: relative;
  padding: 1.5rem 1.25rem;
  border: 1px solid var(--midnight-border);
  border-radius: 16px;
  background: rgba(230, 230, 250, 0.04);
  cursor: pointer;
  transition: transform var(--transition-normal), border-color var(--transition-normal);
}

.tap-card:hover {
  transform: scale(1.02);
  border-color: var(--orchid);
}

.card-icon {
  display: block;
  font-size: 2rem;
  margin-bottom: 0.5rem;
  animation: floatIcon 3s ease-in-out infinite;
}

.card-title {
  font-family: var(--font-serif);
  font-size: var(--text-lg);
  color: var(--blush);
  margin-bottom: 0.4rem;
}

.card-body {
  font-size: var(--text-sm);
  color: var(--text-secondary);
}

.message-bubble {
  position: absolute;
  left: 50%;
  bottom: calc(100% + 8px);
  transform: translateX(-50%);
  width: max-content;
  max-width: 260px;
  padding: 0.6rem 1rem;
  border-radius: 12px;
  background: var(--lavender);
  color: var(--midnight-deep);
  font-size: var(--text-sm);
  box-shadow: 0 8px 24px rgba(0, 0, 0, 0.4);
  animation: fadeInUp 0.3s ease both;
  z-index: 5;
}

.importance-list {
  display: flex;
  flex-direction: column;
  gap: 1rem;
}

.importance-list .tap-card {
  text-align: left;
  display: grid;
  grid-template-columns: auto 1fr;
  column-gap: 1rem;
}

.importance-list .card-icon { grid-row: span 2; align-self: center; }

/* === Birthday === */
.birthday-heading {
  color: var(--gold);
}

.birthday-line {
  color: var(--text-secondary);
  margin: 0.5rem 0 1.5rem;
}

.confetti-container {
  position: absolute;
  inset: 0;
  pointer-events: none;
  overflow: hidden;
  z-index: 1;
}

.confetti {
  position: absolute;
  top: -12px;
  width: 10px;
  height: 10px;
  border-radius: 2px;
  animation: confettiFall linear infinite;
}

/* === Party popper (page load) === */
.party-popper {
  position: fixed;
  inset: 0;
  pointer-events: none;
  overflow: hidden;
  z-index: 9000;
  transition: opacity 1s ease;
}

.party-popper.fading {
  opacity: 0;
}

.party-confetti {
  position: absolute;
  top: -12px;
  width: 8px;
  height: 14px;
  border-radius: 2px;
  animation: confettiFall ease-in forwards;
}

.party-emoji {
  position: absolute;
  top: 50%;
  font-size: 1.75rem;
  animation: emojiPop 2.5s ease-out forwards;
}

/* === Floating particles === */
.floating-particles {
  position: absolute;
  inset: 0;
  pointer-events: none;
  overflow: hidden;
  z-index: 1;
}

.floating-particle {
  position: absolute;
  animation: floatParticle ease-in-out infinite;
}

/* === Wishes === */
.wish-list {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.wish-item {
  border: 1px solid var(--midnight-border);
  border-radius: 16px;
  background: rgba(230, 230, 250, 0.04);
  padding: 1rem 1.25rem;
  cursor: pointer;
  text-align: left;
  transition: border-color var(--transition-normal);
}

.wish-item:hover {
  border-color: var(--orchid);
}

.wish-head {
  display: flex;
  align-items: center;
  gap: 0.75rem;
}

.wish-head .card-icon {
  margin-bottom: 0;
  font-size: 1.5rem;
}

.wish-detail {
  max-height: 0;
  overflow: hidden;
  transition: max-height var(--transition-slow), padding var(--transition-slow);
}

.wish-item.expanded .wish-detail {
  max-height: 200px;
  padding-top: 0.75rem;
}

.wish-detail p {
  color: var(--text-secondary);
  font-size: var(--text-sm);
}

/* === Promises === */
.promise-timeline {
  position: relative;
  text-align: left;
  margin-left: 1rem;
  padding-left: 2rem;
  border-left: 1px solid var(--midnight-border);
}

.promise-item {
  position: relative;
  margin: 1.75rem 0;
  animation: fadeInUp 0.8s ease both;
}

.promise-item:nth-child(2) { animation-delay: 0.15s; }
.promise-item:nth-child(3) { animation-delay: 0.3s; }
.promise-item:nth-child(4) { animation-delay: 0.45s; }

.promise-marker {
  position: absolute;
  left: calc(-2rem - 6px);
  top: 0.5rem;
  width: 11px;
  height: 11px;
  border-radius: 50%;
  background: var(--blush);
  box-shadow: 0 0 12px var(--rose-glow);
}

/* === Choice === */
.choice-buttons {
  display: flex;
  gap: 1rem;
  justify-content: center;
  flex-wrap: wrap;
  margin-bottom: 2rem;
}

.choice-btn {
  border: none;
  border-radius: 999px;
  padding: 0.9rem 2rem;
  font-size: var(--text-base);
  color: var(--midnight-deep);
  transition: transform var(--transition-normal), opacity var(--transition-normal);
}

.choice-forgive   { background: var(--blush); }
.choice-need-time { background: var(--lavender); }

.choice-btn:hover:enabled {
  transform: translateY(-2px) scale(1.03);
}

.choice-btn:disabled {
  opacity: 0.6;
  pointer-events: none;
}

.choice-response {
  padding: 1.5rem;
  border-radius: 16px;
  background: rgba(255, 182, 193, 0.06);
  border: 1px solid var(--midnight-border);
  animation: fadeInUp 0.6s ease both;
}

.choice-response p {
  color: var(--text-secondary);
  margin: 0.4rem 0;
}

.choice-response p:first-child {
  font-size: 2rem;
  margin-bottom: 1rem;
}

/* === Surprise === */
.surprise-line {
  color: var(--text-secondary);
  margin: 0.6rem 0;
}

.sparkles {
  position: absolute;
  inset: 0;
  pointer-events: none;
  overflow: hidden;
  z-index: 1;
  opacity: 0;
  transition: opacity 1s ease;
}

.sparkles.active {
  opacity: 1;
}

.sparkle {
  position: absolute;
  color: var(--gold);
}

.sparkles.active .sparkle {
  animation: twinkle 4s ease-in-out infinite;
}

/* === Click sparkles === */
.click-sparkle-layer {
  position: fixed;
  inset: 0;
  pointer-events: none;
  z-index: 9500;
}

.click-sparkle {
  position: fixed;
  font-size: 1.4rem;
  animation: sparkleFly 0.8s ease-out forwards;
}

/* === Mouse follower === */
.mouse-follower {
  position: fixed;
  pointer-events: none;
  z-index: 9400;
  font-size: 1.3rem;
  transform: translate(-50%, -50%);
  transition: left 0.25s ease-out, top 0.25s ease-out, opacity 0.3s ease;
}

/* === Navigation dots === */
.nav-dots {
  position: fixed;
  right: 18px;
  top: 50%;
  transform: translateY(-50%);
  display: flex;
  flex-direction: column;
  gap: 10px;
  z-index: 9800;
}

.dot {
  width: 12px;
  height: 12px;
  border-radius: 50%;
  border: 1px solid var(--text-muted);
  background: transparent;
  cursor: pointer;
  padding: 0;
  transition: all var(--transition-normal);
}

.dot:hover {
  border-color: var(--blush);
  transform: scale(1.25);
}

.dot.active {
  background: var(--blush);
  border-color: var(--blush);
  box-shadow: 0 0 10px var(--rose-glow);
}

.dot:focus-visible {
  outline: 2px solid var(--lavender);
  outline-offset: 2px;
}

/* === Finale === */
.finale-lines p {
  color: var(--text-secondary);
  margin: 0.5rem 0 1.5rem;
}

/* === Keyframes === */
@keyframes fadeInUp {
  from { opacity: 0; transform: translateY(16px); }
  to   { opacity: 1; transform: translateY(0); }
}

@keyframes bob {
  0%, 100% { transform: translateY(0); }
  50%      { transform: translateY(8px); }
}

@keyframes blink {
  0%, 100% { opacity: 1; }
  50%      { opacity: 0; }
}

@keyframes confettiFall {
  from { transform: translateY(-12px) rotate(0deg); opacity: 1; }
  to   { transform: translateY(105vh) rotate(540deg); opacity: 0.7; }
}

@keyframes emojiPop {
  0%   { transform: translateY(0) scale(0.4); opacity: 0; }
  20%  { transform: translateY(-18vh) scale(1.1); opacity: 1; }
  100% { transform: translateY(30vh) scale(0.9); opacity: 0; }
}

@keyframes floatParticle {
  0%, 100% { transform: translate(0, 0); }
  25%      { transform: translate(12px, -22px); }
  50%      { transform: translate(-8px, -40px); }
  75%      { transform: translate(-16px, -14px); }
}

@keyframes floatIcon {
  0%, 100% { transform: translateY(0); }
  50%      { transform: translateY(-6px); }
}

@keyframes twinkle {
  0%, 100% { opacity: 0.15; transform: scale(0.8); }
  50%      { opacity: 1; transform: scale(1.2); }
}

@keyframes sparkleFly {
  0%   { transform: translate(0, 0) scale(0); opacity: 1; }
  50%  { transform: translate(calc(var(--fly-x) * 0.5), calc(var(--fly-y) * 0.5)) scale(1); opacity: 1; }
  100% { transform: translate(var(--fly-x), var(--fly-y)) scale(0); opacity: 0; }
}

@keyframes ripple {
  to { width: 320px; height: 320px; opacity: 0; }
}

@keyframes pulse {
  0%, 100% { transform: scale(1); }
  50%      { transform: scale(1.05); }
}
"#;
