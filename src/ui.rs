use crate::models::{DEFAULT_TAGS, Mood, Settings, Theme};

/// Seeds the page with the saved settings and the static mood/tag tables so
/// the client script and the server share one source of truth.
pub fn render_index(settings: &Settings) -> String {
    let moods: Vec<serde_json::Value> = Mood::ALL
        .iter()
        .map(|mood| {
            let config = mood.config();
            serde_json::json!({
                "code": mood.code(),
                "score": config.score,
                "label": config.label,
                "icon": config.icon,
                "hex": config.hex,
            })
        })
        .collect();

    let theme = match settings.theme {
        Theme::Dark => "dark",
        Theme::Light => "light",
    };

    INDEX_HTML
        .replace("{{THEME}}", theme)
        .replace("{{USER_NAME}}", &escape_html(&settings.user_name))
        .replace("{{MOODS}}", &serde_json::json!(moods).to_string())
        .replace("{{TAGS}}", &serde_json::json!(DEFAULT_TAGS).to_string())
}

fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Stats Of Mind</title>
  <style>
    :root {
      --bg: #f8fafc;
      --card: #ffffff;
      --ink: #1e293b;
      --muted: #64748b;
      --faint: #94a3b8;
      --line: #e2e8f0;
      --cell: #e2e8f0;
      --accent: #10b981;
      --accent-soft: rgba(16, 185, 129, 0.12);
      --danger: #fb7185;
      --shadow: 0 18px 40px rgba(30, 41, 59, 0.08);
    }

    body.dark {
      --bg: #0f172a;
      --card: #1e293b;
      --ink: #f8fafc;
      --muted: #94a3b8;
      --faint: #64748b;
      --line: #334155;
      --cell: #334155;
      --shadow: 0 18px 40px rgba(2, 6, 23, 0.5);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Segoe UI", "Helvetica Neue", sans-serif;
      display: flex;
      justify-content: center;
    }

    .app {
      width: min(480px, 100%);
      min-height: 100vh;
      padding: 24px 20px 96px;
      display: flex;
      flex-direction: column;
      gap: 20px;
    }

    .hidden {
      display: none !important;
    }

    .top {
      display: flex;
      justify-content: space-between;
      align-items: flex-end;
    }

    h1 {
      margin: 0;
      font-size: 1.7rem;
      letter-spacing: -0.02em;
    }

    h2 {
      margin: 0 0 12px;
      font-size: 1.4rem;
    }

    .subtitle {
      margin: 4px 0 0;
      color: var(--muted);
      font-size: 0.9rem;
    }

    .streak {
      display: flex;
      flex-direction: column;
      align-items: flex-end;
    }

    .streak .badge {
      background: var(--accent-soft);
      color: var(--accent);
      font-weight: 700;
      padding: 4px 12px;
      border-radius: 999px;
    }

    .streak .label {
      font-size: 0.65rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: var(--faint);
      margin-top: 4px;
    }

    .card {
      background: var(--card);
      border: 1px solid var(--line);
      border-radius: 22px;
      padding: 18px;
      box-shadow: var(--shadow);
    }

    .card h3 {
      margin: 0 0 10px;
      font-size: 0.7rem;
      font-weight: 700;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: var(--faint);
    }

    .quote-card {
      background: linear-gradient(135deg, #10b981, #0d9488);
      color: white;
      border-radius: 22px;
      padding: 22px;
      box-shadow: var(--shadow);
    }

    .quote-card p {
      margin: 0;
    }

    .quote-card .author {
      margin-top: 10px;
      font-size: 0.85rem;
      opacity: 0.8;
    }

    .cards {
      display: grid;
      grid-template-columns: 1fr 1fr;
      gap: 14px;
    }

    #trend-chart {
      width: 100%;
      height: 90px;
      display: block;
    }

    .chart-line {
      fill: none;
      stroke: var(--accent);
      stroke-width: 3;
    }

    .chart-fill {
      fill: var(--accent-soft);
      stroke: none;
    }

    .chart-point {
      fill: var(--card);
      stroke: var(--accent);
      stroke-width: 2;
    }

    .month-row {
      display: flex;
      justify-content: space-between;
      border-top: 1px solid var(--line);
      padding-top: 10px;
      margin-top: 8px;
    }

    .month-row .label {
      display: block;
      font-size: 0.6rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: var(--faint);
    }

    .month-row .value {
      font-size: 1.4rem;
      font-weight: 700;
    }

    #month-grade.good {
      color: var(--accent);
    }

    #month-grade.bad {
      color: var(--danger);
    }

    .actions-card {
      display: flex;
      flex-direction: column;
      gap: 10px;
      justify-content: center;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 16px;
      padding: 12px 16px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
      transition: transform 120ms ease;
    }

    button:active {
      transform: scale(0.97);
    }

    .btn-primary {
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 22px rgba(16, 185, 129, 0.3);
    }

    .btn-secondary {
      background: var(--line);
      color: var(--ink);
    }

    .btn-log {
      background: transparent;
      border: 2px dashed var(--line);
      color: var(--muted);
      padding: 20px 12px;
      font-size: 1rem;
    }

    .btn-log .icon {
      display: block;
      font-size: 1.6rem;
      margin-bottom: 6px;
    }

    .life-bar {
      flex: 1;
      height: 10px;
      background: var(--line);
      border-radius: 999px;
      overflow: hidden;
    }

    .life-row {
      display: flex;
      align-items: center;
      gap: 12px;
    }

    #life-fill {
      height: 100%;
      width: 0%;
      background: var(--ink);
      border-radius: 999px;
      transition: width 600ms ease;
    }

    .month-nav {
      display: flex;
      justify-content: space-between;
      align-items: center;
    }

    .month-nav button {
      background: var(--line);
      padding: 8px 14px;
      border-radius: 12px;
    }

    .weekday-row,
    .calendar-grid {
      display: grid;
      grid-template-columns: repeat(7, 1fr);
      gap: 6px;
    }

    .weekday-row span {
      text-align: center;
      font-size: 0.7rem;
      font-weight: 700;
      color: var(--faint);
    }

    .day {
      aspect-ratio: 1;
      border-radius: 12px;
      border: none;
      background: var(--cell);
      color: var(--faint);
      font-size: 0.75rem;
      font-weight: 600;
      padding: 0;
    }

    .day.logged {
      color: white;
    }

    .day.today {
      outline: 2px solid var(--ink);
      outline-offset: 1px;
    }

    .day.blank {
      background: transparent;
    }

    .memento-grid {
      display: grid;
      grid-template-columns: repeat(52, 1fr);
      gap: 1px;
      margin: 14px 0;
    }

    .memento-grid i {
      aspect-ratio: 1;
      border-radius: 1px;
      background: var(--cell);
    }

    .memento-grid i.lived {
      background: var(--muted);
    }

    .memento-grid i.current {
      background: var(--accent);
    }

    .hint {
      text-align: center;
      font-size: 0.7rem;
      color: var(--faint);
      font-style: italic;
    }

    .field {
      margin-bottom: 14px;
    }

    .field label {
      display: block;
      font-size: 0.8rem;
      color: var(--muted);
      margin-bottom: 6px;
    }

    .field input {
      width: 100%;
      background: var(--bg);
      color: var(--ink);
      border: 1px solid var(--line);
      border-radius: 12px;
      padding: 10px 12px;
      font-size: 0.95rem;
    }

    .row {
      display: flex;
      justify-content: space-between;
      align-items: center;
    }

    .stack {
      display: flex;
      flex-direction: column;
      gap: 10px;
    }

    .bottom-nav {
      position: fixed;
      bottom: 0;
      left: 0;
      right: 0;
      background: var(--card);
      border-top: 1px solid var(--line);
      display: flex;
      justify-content: center;
      gap: 8px;
      padding: 8px 0 14px;
    }

    .bottom-nav button {
      background: transparent;
      color: var(--faint);
      width: 86px;
      display: flex;
      flex-direction: column;
      align-items: center;
      gap: 2px;
      font-size: 0.7rem;
    }

    .bottom-nav button .glyph {
      font-size: 1.2rem;
    }

    .bottom-nav button.active {
      color: var(--accent);
    }

    .modal {
      position: fixed;
      inset: 0;
      background: rgba(2, 6, 23, 0.6);
      display: flex;
      align-items: center;
      justify-content: center;
      padding: 16px;
      z-index: 50;
    }

    .modal-box {
      background: var(--card);
      width: min(420px, 100%);
      max-height: 90vh;
      overflow-y: auto;
      border-radius: 22px;
      padding: 22px;
    }

    .modal-head {
      display: flex;
      justify-content: space-between;
      align-items: center;
      margin-bottom: 14px;
    }

    .modal-head button {
      background: transparent;
      color: var(--muted);
      font-size: 1.2rem;
      padding: 4px 10px;
    }

    .mood-grid {
      display: grid;
      grid-template-columns: repeat(3, 1fr);
      gap: 10px;
      margin-bottom: 16px;
    }

    .mood-option {
      background: transparent;
      border: 2px solid var(--line);
      border-radius: 16px;
      padding: 10px 4px;
      display: flex;
      flex-direction: column;
      align-items: center;
      gap: 4px;
      color: var(--muted);
      font-size: 0.7rem;
      font-weight: 700;
    }

    .mood-option .icon {
      font-size: 1.4rem;
    }

    .mood-option.selected {
      border-color: transparent;
      color: white;
    }

    .tag-row {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
      margin-bottom: 12px;
    }

    .tag {
      background: var(--line);
      color: var(--muted);
      border-radius: 999px;
      padding: 6px 12px;
      font-size: 0.75rem;
      font-weight: 700;
    }

    .tag.selected {
      background: var(--accent-soft);
      color: var(--accent);
    }

    textarea {
      width: 100%;
      min-height: 90px;
      background: var(--bg);
      color: var(--ink);
      border: 1px solid var(--line);
      border-radius: 14px;
      padding: 12px;
      font-size: 0.9rem;
      resize: none;
      margin-bottom: 14px;
      font-family: inherit;
    }

    .status {
      position: fixed;
      bottom: 76px;
      left: 50%;
      transform: translateX(-50%);
      font-size: 0.85rem;
      color: var(--muted);
      background: var(--card);
      border: 1px solid var(--line);
      border-radius: 999px;
      padding: 6px 16px;
      opacity: 0;
      transition: opacity 200ms ease;
      pointer-events: none;
    }

    .status.visible {
      opacity: 1;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: var(--accent);
    }
  </style>
</head>
<body class="{{THEME}}">
  <main class="app">
    <section id="view-dashboard" class="view">
      <header class="top">
        <div>
          <h1 id="greeting">Olá, {{USER_NAME}}</h1>
          <p id="today-label" class="subtitle"></p>
        </div>
        <div class="streak">
          <span class="badge" id="streak-count">0 dias</span>
          <span class="label">Sequência</span>
        </div>
      </header>

      <div class="quote-card">
        <p id="quote-text"></p>
        <p class="author" id="quote-author"></p>
      </div>

      <div class="cards">
        <div class="card">
          <h3>Tendência (7d)</h3>
          <svg id="trend-chart" viewBox="0 0 320 110" preserveAspectRatio="none"></svg>
          <div class="month-row">
            <div>
              <span class="label">Nota do mês</span>
              <span class="value" id="month-grade">-</span>
            </div>
            <div style="text-align:right">
              <span class="label">Registros</span>
              <span class="value" id="month-count">0</span>
            </div>
          </div>
        </div>
        <div class="card actions-card">
          <button id="log-today" class="btn-log">
            <span class="icon" id="log-icon">+</span>
            <span id="log-label">Registrar</span>
          </button>
          <button id="share-month" class="btn-secondary">Compartilhar mês</button>
        </div>
      </div>

      <div class="card">
        <h3>Vida vivida (80 anos)</h3>
        <div class="life-row">
          <div class="life-bar"><div id="life-fill"></div></div>
          <strong id="life-percent">0%</strong>
        </div>
      </div>
    </section>

    <section id="view-calendar" class="view hidden">
      <div class="month-nav">
        <h2 id="month-label"></h2>
        <div>
          <button id="prev-month">&#8249;</button>
          <button id="next-month">&#8250;</button>
        </div>
      </div>
      <div class="weekday-row">
        <span>D</span><span>S</span><span>T</span><span>Q</span><span>Q</span><span>S</span><span>S</span>
      </div>
      <div class="calendar-grid" id="calendar-grid"></div>
    </section>

    <section id="view-memento" class="view hidden">
      <div class="card">
        <h2>Memento Mori</h2>
        <p class="subtitle"><strong id="memento-percent" style="color: var(--accent)">0%</strong> da vida estimada vivida.</p>
      </div>
      <div class="card">
        <div class="memento-grid" id="memento-grid"></div>
        <p class="hint">1 ponto = 1 semana de vida (80 anos)</p>
      </div>
    </section>

    <section id="view-settings" class="view hidden">
      <h2>Configurações</h2>
      <div class="card">
        <h3>Preferências</h3>
        <div class="row" style="margin-bottom: 14px">
          <span>Modo escuro</span>
          <button id="theme-toggle" class="btn-secondary"></button>
        </div>
        <div class="field">
          <label for="name-input">Seu nome</label>
          <input type="text" id="name-input" />
        </div>
      </div>
      <div class="card">
        <h3>Vida (Memento Mori)</h3>
        <div class="field">
          <label for="birth-input">Data de nascimento</label>
          <input type="date" id="birth-input" />
        </div>
      </div>
      <div class="card stack">
        <h3>Dados</h3>
        <button id="save-settings" class="btn-primary">Salvar ajustes</button>
        <button id="export-backup" class="btn-secondary">Exportar backup JSON</button>
        <input type="file" id="import-file" accept=".json" class="hidden" />
        <button id="import-backup" class="btn-secondary">Importar backup JSON</button>
      </div>
    </section>
  </main>

  <nav class="bottom-nav">
    <button data-view="dashboard" class="active"><span class="glyph">&#9632;</span>Hoje</button>
    <button data-view="calendar"><span class="glyph">&#9638;</span>Diário</button>
    <button data-view="memento"><span class="glyph">&#9633;</span>Vida</button>
    <button data-view="settings"><span class="glyph">&#9881;</span>Ajustes</button>
  </nav>

  <div id="modal" class="modal hidden">
    <div class="modal-box">
      <div class="modal-head">
        <h2 id="modal-title">Registro</h2>
        <button id="modal-close">&#10005;</button>
      </div>
      <div class="mood-grid" id="mood-options"></div>
      <div class="tag-row" id="tag-options"></div>
      <textarea id="note-input" placeholder="Escreva sobre seu dia..."></textarea>
      <button id="modal-save" class="btn-primary" style="width: 100%">Salvar registro</button>
    </div>
  </div>

  <div class="status" id="status"></div>

  <script>
    const MOODS = {{MOODS}};
    const TAGS = {{TAGS}};
    const moodByCode = Object.fromEntries(MOODS.map((m) => [m.code, m]));

    let entries = {};
    let dashboard = null;
    let settings = null;
    let calendarCursor = new Date();
    let modalDate = null;
    let modalMood = null;
    let modalTags = [];

    const statusEl = document.getElementById('status');
    let statusTimer = null;

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
      statusEl.classList.add('visible');
      clearTimeout(statusTimer);
      statusTimer = setTimeout(() => statusEl.classList.remove('visible'), 2200);
    };

    const pad = (n) => String(n).padStart(2, '0');
    const dateKey = (d) => `${d.getFullYear()}-${pad(d.getMonth() + 1)}-${pad(d.getDate())}`;
    const monthLabel = (d) =>
      d.toLocaleDateString('pt-BR', { month: 'long', year: 'numeric' }).replace(/^./, (c) => c.toUpperCase());

    /* ---- navigation ---- */

    const navButtons = Array.from(document.querySelectorAll('.bottom-nav button'));
    const showView = (name) => {
      document.querySelectorAll('.view').forEach((section) => {
        section.classList.toggle('hidden', section.id !== `view-${name}`);
      });
      navButtons.forEach((button) => button.classList.toggle('active', button.dataset.view === name));
      if (name === 'calendar') renderCalendar();
      if (name === 'memento') renderMemento();
    };
    navButtons.forEach((button) => button.addEventListener('click', () => showView(button.dataset.view)));

    /* ---- dashboard ---- */

    const renderTrend = (points) => {
      const svg = document.getElementById('trend-chart');
      const width = 320;
      const height = 110;
      const padX = 10;
      const padY = 12;
      const maxScore = 5;
      const x = (i) => padX + (i * (width - padX * 2)) / (points.length - 1);
      const y = (score) => height - padY - (score / maxScore) * (height - padY * 2);

      const line = points
        .map((p, i) => `${i === 0 ? 'M' : 'L'} ${x(i).toFixed(1)} ${y(p.score).toFixed(1)}`)
        .join(' ');
      const area = `${line} L ${x(points.length - 1).toFixed(1)} ${height - padY} L ${padX} ${height - padY} Z`;
      const dots = points
        .map((p, i) => (p.logged ? `<circle class="chart-point" cx="${x(i).toFixed(1)}" cy="${y(p.score).toFixed(1)}" r="3.5" />` : ''))
        .join('');

      svg.innerHTML = `<path class="chart-fill" d="${area}" /><path class="chart-line" d="${line}" />${dots}`;
    };

    const renderDashboard = () => {
      const today = new Date();
      document.getElementById('today-label').textContent = today.toLocaleDateString('pt-BR', {
        weekday: 'long',
        day: 'numeric',
        month: 'long'
      });
      document.getElementById('streak-count').textContent = `${dashboard.streak} dias`;
      document.getElementById('quote-text').textContent = `"${dashboard.quote.text}"`;
      document.getElementById('quote-author').textContent = `— ${dashboard.quote.author}`;

      const gradeEl = document.getElementById('month-grade');
      gradeEl.textContent = dashboard.month.grade;
      gradeEl.classList.toggle('good', dashboard.month.average >= 3);
      gradeEl.classList.toggle('bad', dashboard.month.count > 0 && dashboard.month.average < 3);
      document.getElementById('month-count').textContent = dashboard.month.count;

      renderTrend(dashboard.trend);

      const logged = dashboard.today;
      document.getElementById('log-icon').textContent = logged ? moodByCode[logged.mood].icon : '+';
      document.getElementById('log-label').textContent = logged ? 'Editar' : 'Registrar';

      document.getElementById('life-fill').style.width = `${Math.min(dashboard.life.percentage, 100)}%`;
      document.getElementById('life-percent').textContent = `${dashboard.life.percentage}%`;
      document.getElementById('memento-percent').textContent = `${dashboard.life.percentage}%`;
    };

    const loadDashboard = async () => {
      const res = await fetch('/api/dashboard');
      if (!res.ok) throw new Error('Não foi possível carregar o painel');
      dashboard = await res.json();
      renderDashboard();
    };

    const loadEntries = async () => {
      const res = await fetch('/api/entries');
      if (!res.ok) throw new Error('Não foi possível carregar os registros');
      entries = await res.json();
    };

    const refresh = () => Promise.all([loadDashboard(), loadEntries()]);

    /* ---- calendar ---- */

    const renderCalendar = () => {
      document.getElementById('month-label').textContent = monthLabel(calendarCursor);
      const year = calendarCursor.getFullYear();
      const month = calendarCursor.getMonth();
      const days = new Date(year, month + 1, 0).getDate();
      const firstDay = new Date(year, month, 1).getDay();
      const todayId = dateKey(new Date());

      const grid = document.getElementById('calendar-grid');
      grid.innerHTML = '';
      for (let i = 0; i < firstDay; i += 1) {
        const blank = document.createElement('div');
        blank.className = 'day blank';
        grid.appendChild(blank);
      }
      for (let day = 1; day <= days; day += 1) {
        const key = dateKey(new Date(year, month, day));
        const entry = entries[key];
        const cell = document.createElement('button');
        cell.className = 'day';
        cell.textContent = day;
        if (entry) {
          cell.classList.add('logged');
          cell.style.background = moodByCode[entry.mood].hex;
        }
        if (key === todayId) cell.classList.add('today');
        cell.addEventListener('click', () => openModal(key));
        grid.appendChild(cell);
      }
    };

    document.getElementById('prev-month').addEventListener('click', () => {
      calendarCursor = new Date(calendarCursor.getFullYear(), calendarCursor.getMonth() - 1);
      renderCalendar();
    });
    document.getElementById('next-month').addEventListener('click', () => {
      calendarCursor = new Date(calendarCursor.getFullYear(), calendarCursor.getMonth() + 1);
      renderCalendar();
    });

    /* ---- memento mori ---- */

    const renderMemento = () => {
      if (!dashboard) return;
      const grid = document.getElementById('memento-grid');
      grid.innerHTML = '';
      const fragment = document.createDocumentFragment();
      for (let week = 0; week < dashboard.life.total; week += 1) {
        const dot = document.createElement('i');
        if (week === dashboard.life.lived) dot.className = 'current';
        else if (week < dashboard.life.lived) dot.className = 'lived';
        fragment.appendChild(dot);
      }
      grid.appendChild(fragment);
    };

    /* ---- entry modal ---- */

    const modal = document.getElementById('modal');

    const renderMoodOptions = () => {
      const box = document.getElementById('mood-options');
      box.innerHTML = '';
      MOODS.forEach((mood) => {
        const button = document.createElement('button');
        button.className = 'mood-option';
        button.innerHTML = `<span class="icon">${mood.icon}</span><span>${mood.label}</span>`;
        if (mood.code === modalMood) {
          button.classList.add('selected');
          button.style.background = mood.hex;
        }
        button.addEventListener('click', () => {
          modalMood = mood.code;
          renderMoodOptions();
        });
        box.appendChild(button);
      });
    };

    const renderTagOptions = () => {
      const box = document.getElementById('tag-options');
      box.innerHTML = '';
      TAGS.forEach((tag) => {
        const button = document.createElement('button');
        button.className = 'tag';
        button.textContent = tag;
        if (modalTags.includes(tag)) button.classList.add('selected');
        button.addEventListener('click', () => {
          modalTags = modalTags.includes(tag) ? modalTags.filter((t) => t !== tag) : [...modalTags, tag];
          renderTagOptions();
        });
        box.appendChild(button);
      });
    };

    const openModal = (key) => {
      modalDate = key;
      const existing = entries[key];
      modalMood = existing ? existing.mood : null;
      modalTags = existing ? [...existing.tags] : [];
      document.getElementById('note-input').value = existing ? existing.note : '';
      document.getElementById('modal-title').textContent = `Registro: ${key}`;
      renderMoodOptions();
      renderTagOptions();
      modal.classList.remove('hidden');
    };

    const closeModal = () => modal.classList.add('hidden');
    document.getElementById('modal-close').addEventListener('click', closeModal);
    modal.addEventListener('click', (event) => {
      if (event.target === modal) closeModal();
    });

    document.getElementById('modal-save').addEventListener('click', async () => {
      if (!modalMood) {
        setStatus('Escolha como você está.', 'error');
        return;
      }
      const res = await fetch(`/api/entries/${modalDate}`, {
        method: 'PUT',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify({
          mood: modalMood,
          note: document.getElementById('note-input').value,
          tags: modalTags
        })
      });
      if (!res.ok) {
        setStatus(await res.text(), 'error');
        return;
      }
      closeModal();
      setStatus('Registro salvo', 'ok');
      await refresh();
      renderCalendar();
    });

    document.getElementById('log-today').addEventListener('click', () => openModal(dateKey(new Date())));

    /* ---- share ---- */

    document.getElementById('share-month').addEventListener('click', async () => {
      try {
        const now = new Date();
        const res = await fetch(`/api/snapshot/${now.getFullYear()}/${now.getMonth() + 1}`);
        if (!res.ok) throw new Error('Erro ao gerar imagem.');
        const blob = await res.blob();
        const file = new File([blob], `stats-of-mind-${dateKey(now)}.png`, { type: 'image/png' });
        if (navigator.canShare && navigator.canShare({ files: [file] })) {
          await navigator.share({
            files: [file],
            title: 'Meu mês no Stats Of Mind',
            text: `Estou com nota ${dashboard.month.grade} este mês!`
          });
        } else {
          const url = URL.createObjectURL(blob);
          const anchor = document.createElement('a');
          anchor.href = url;
          anchor.download = file.name;
          anchor.click();
          URL.revokeObjectURL(url);
          setStatus('Imagem gerada e baixada.', 'ok');
        }
      } catch (err) {
        setStatus(err.message, 'error');
      }
    });

    /* ---- settings ---- */

    const themeToggle = document.getElementById('theme-toggle');

    const renderSettingsForm = () => {
      document.getElementById('name-input').value = settings.user_name;
      document.getElementById('birth-input').value = settings.birth_date;
      themeToggle.textContent = settings.theme === 'dark' ? 'Escuro' : 'Claro';
      document.body.className = settings.theme;
      document.getElementById('greeting').textContent = `Olá, ${settings.user_name}`;
    };

    const loadSettings = async () => {
      const res = await fetch('/api/settings');
      if (!res.ok) throw new Error('Não foi possível carregar os ajustes');
      settings = await res.json();
      renderSettingsForm();
    };

    themeToggle.addEventListener('click', () => {
      settings.theme = settings.theme === 'dark' ? 'light' : 'dark';
      renderSettingsForm();
    });

    document.getElementById('save-settings').addEventListener('click', async () => {
      settings.user_name = document.getElementById('name-input').value || 'Viajante';
      settings.birth_date = document.getElementById('birth-input').value || settings.birth_date;
      const res = await fetch('/api/settings', {
        method: 'PUT',
        headers: { 'content-type': 'application/json' },
        body: JSON.stringify(settings)
      });
      if (!res.ok) {
        setStatus(await res.text(), 'error');
        return;
      }
      settings = await res.json();
      renderSettingsForm();
      setStatus('Ajustes salvos', 'ok');
      loadDashboard().catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('export-backup').addEventListener('click', () => {
      window.location.href = '/api/export';
    });

    const importFile = document.getElementById('import-file');
    document.getElementById('import-backup').addEventListener('click', () => importFile.click());
    importFile.addEventListener('change', async (event) => {
      const file = event.target.files[0];
      if (!file) return;
      const text = await file.text();
      const res = await fetch('/api/import', { method: 'POST', body: text });
      if (!res.ok) {
        setStatus('Erro ao ler arquivo de backup.', 'error');
      } else {
        setStatus('Dados importados com sucesso!', 'ok');
        await refresh();
        await loadSettings();
        renderCalendar();
      }
      event.target.value = '';
    });

    /* ---- boot ---- */

    Promise.all([refresh(), loadSettings()]).catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_interpolates_settings() {
        let settings = Settings {
            theme: Theme::Light,
            birth_date: "1990-01-01".to_string(),
            user_name: "Ana".to_string(),
        };
        let page = render_index(&settings);
        assert!(page.contains("Olá, Ana"));
        assert!(page.contains("<body class=\"light\">"));
        assert!(!page.contains("{{"));
    }

    #[test]
    fn index_embeds_mood_and_tag_tables() {
        let page = render_index(&Settings::default());
        assert!(page.contains("\"code\":\"A\""));
        assert!(page.contains("Incrível"));
        assert!(page.contains("Trabalho"));
    }

    #[test]
    fn user_name_is_html_escaped() {
        let settings = Settings {
            user_name: "<b>x</b>".to_string(),
            ..Settings::default()
        };
        let page = render_index(&settings);
        assert!(page.contains("Olá, &lt;b&gt;x&lt;/b&gt;"));
    }
}
