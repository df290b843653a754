use std::time::Duration;

pub fn render_index(refresh: Duration) -> String {
    INDEX_HTML.replace("{{REFRESH_SECS}}", &refresh.as_secs().to_string())
}

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Devotion Sheet Dashboard</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=IBM+Plex+Sans:wght@400;500;600&family=IBM+Plex+Serif:wght@600&display=swap');

    :root {
      --bg-1: #eef2f6;
      --bg-2: #cfdeeb;
      --ink: #22262b;
      --muted: #5d6670;
      --accent: #2f6db3;
      --accent-warm: #c2572b;
      --card: #ffffff;
      --line: rgba(34, 38, 43, 0.1);
      --shadow: 0 18px 44px rgba(47, 77, 110, 0.16);
    }

    * { box-sizing: border-box; }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(160deg, var(--bg-2), var(--bg-1) 55%);
      color: var(--ink);
      font-family: "IBM Plex Sans", "Helvetica Neue", sans-serif;
      display: grid;
      place-items: start center;
      padding: 36px 16px 56px;
    }

    .app {
      width: min(960px, 100%);
      background: var(--card);
      border-radius: 20px;
      box-shadow: var(--shadow);
      padding: 32px;
      display: grid;
      gap: 24px;
    }

    header h1 {
      font-family: "IBM Plex Serif", Georgia, serif;
      font-size: clamp(1.7rem, 3.5vw, 2.3rem);
      margin: 0 0 4px;
    }

    .subtitle { margin: 0; color: var(--muted); }

    .controls {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      gap: 12px;
    }

    .controls label { font-weight: 600; }

    select {
      font: inherit;
      padding: 10px 14px;
      border-radius: 10px;
      border: 1px solid var(--line);
      background: #f7f9fb;
      min-width: 220px;
    }

    .banner {
      border-radius: 12px;
      padding: 14px 16px;
      display: none;
    }

    .banner.visible { display: block; }

    .banner.help { background: #eef4fb; color: #2c4f75; }
    .banner.warn { background: #fbf3e9; color: #8a5220; }
    .banner.error { background: #fbecea; color: #9c3326; }

    .tiles {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(170px, 1fr));
      gap: 14px;
    }

    .tile {
      border: 1px solid var(--line);
      border-radius: 14px;
      padding: 14px 16px;
      background: #fbfcfd;
    }

    .tile .label {
      display: block;
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: var(--muted);
    }

    .tile .value {
      display: block;
      margin-top: 6px;
      font-size: 1.5rem;
      font-weight: 600;
      color: var(--accent);
    }

    .chart-card {
      border: 1px solid var(--line);
      border-radius: 16px;
      padding: 18px;
      display: grid;
      gap: 10px;
    }

    .chart-card h2 { margin: 0; font-size: 1.15rem; }
    .chart-card .note { margin: 0; color: var(--muted); font-size: 0.9rem; }

    svg.chart { width: 100%; height: 280px; display: block; }
    svg.chart text { font-family: "IBM Plex Sans", sans-serif; }

    .legend {
      display: flex;
      flex-wrap: wrap;
      gap: 14px;
      font-size: 0.88rem;
      color: var(--muted);
    }

    .legend .swatch {
      display: inline-block;
      width: 12px;
      height: 12px;
      border-radius: 3px;
      margin-right: 6px;
      vertical-align: -1px;
    }

    .ranking { display: grid; gap: 8px; }

    .ranking .row {
      display: grid;
      grid-template-columns: 130px 1fr 44px;
      align-items: center;
      gap: 10px;
    }

    .ranking .bar-track {
      background: #eef1f4;
      border-radius: 999px;
      height: 14px;
      overflow: hidden;
    }

    .ranking .bar {
      background: var(--accent);
      height: 100%;
      border-radius: 999px;
    }

    .ranking .count { text-align: right; font-weight: 600; }

    .hint { margin: 0; color: var(--muted); font-size: 0.85rem; }

    section.view { display: none; gap: 24px; }
    section.view.visible { display: grid; }

    @media (max-width: 620px) {
      .app { padding: 24px 18px; }
      .ranking .row { grid-template-columns: 90px 1fr 40px; }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Devotion Sheet Dashboard</h1>
      <p class="subtitle">Attendance, scripture reading, prayer, and devotion fees from the shared sheet.</p>
    </header>

    <div class="controls">
      <label for="participant">Participant</label>
      <select id="participant">
        <option value="">Choose a participant…</option>
      </select>
    </div>

    <div id="help" class="banner help visible">
      Pick a participant to see their daily activity, or choose <strong>All participants</strong> for the group view.
    </div>
    <div id="warn" class="banner warn"></div>
    <div id="error" class="banner error"></div>

    <section id="participant-view" class="view">
      <div class="tiles">
        <div class="tile"><span class="label">Days attended</span><span class="value" id="tile-attended">0</span></div>
        <div class="tile"><span class="label">Readings</span><span class="value" id="tile-readings">0</span></div>
        <div class="tile"><span class="label">Prayer days</span><span class="value" id="tile-prayer">0</span></div>
        <div class="tile"><span class="label">Total fee</span><span class="value" id="tile-fee">0</span></div>
      </div>

      <div class="chart-card">
        <h2>Daily activity</h2>
        <p class="note">Attendance, reading count, chapters reached, and prayer days per submission date.</p>
        <svg id="activity-chart" class="chart" viewBox="0 0 640 280" role="img" aria-label="Daily activity chart"></svg>
        <div class="legend" id="activity-legend"></div>
      </div>

      <div class="chart-card">
        <h2>Devotion fee</h2>
        <p class="note">Per-day amount and the running total.</p>
        <svg id="fee-chart" class="chart" viewBox="0 0 640 280" role="img" aria-label="Devotion fee chart"></svg>
        <div class="legend" id="fee-legend"></div>
      </div>
    </section>

    <section id="all-view" class="view">
      <div class="chart-card">
        <h2>Attendance ranking</h2>
        <p class="note">Total attended days per participant.</p>
        <div class="ranking" id="ranking"></div>
      </div>

      <div class="chart-card">
        <h2>Cumulative devotion fee</h2>
        <p class="note">Running totals for every participant.</p>
        <svg id="all-fee-chart" class="chart" viewBox="0 0 640 280" role="img" aria-label="Cumulative fee chart"></svg>
        <div class="legend" id="all-fee-legend"></div>
      </div>
    </section>

    <p class="hint">Sheet snapshots refresh every {{REFRESH_SECS}} seconds; malformed rows are skipped.</p>
  </main>

  <script>
    const selectEl = document.getElementById('participant');
    const helpEl = document.getElementById('help');
    const warnEl = document.getElementById('warn');
    const errorEl = document.getElementById('error');
    const participantView = document.getElementById('participant-view');
    const allView = document.getElementById('all-view');

    const PALETTE = ['#2f6db3', '#c2572b', '#3a8f5f', '#8b5ca8', '#b0851f', '#50748f'];
    const ALL = '*';

    const show = (el, on) => el.classList.toggle('visible', on);

    const setBanner = (el, message) => {
      el.textContent = message || '';
      show(el, Boolean(message));
    };

    const fmt = (value) => Number(value).toLocaleString('en-US');

    const shortDate = (date) => date.slice(5);

    const renderChart = (svg, legendEl, seriesList, options = {}) => {
      const width = 640;
      const height = 280;
      const padX = 48;
      const padY = 36;
      const top = 20;

      const points = seriesList.flatMap((s) => s.points);
      if (!points.length) {
        svg.innerHTML = '<text x="50%" y="50%" text-anchor="middle" fill="#5d6670" font-size="13">No data yet</text>';
        legendEl.innerHTML = '';
        return;
      }

      const dates = [...new Set(points.map((p) => p.date))].sort();
      const xIndex = new Map(dates.map((d, i) => [d, i]));
      let max = Math.max(...points.map((p) => p.value), 1);
      const min = 0;

      const xStep = dates.length > 1 ? (width - padX * 2) / (dates.length - 1) : 0;
      const x = (date) => (dates.length > 1 ? padX + xIndex.get(date) * xStep : width / 2);
      const y = (value) => height - padY - ((value - min) / (max - min)) * (height - padY - top);

      let grid = '';
      const ticks = 4;
      for (let i = 0; i <= ticks; i += 1) {
        const value = min + ((max - min) * i) / ticks;
        const yPos = y(value);
        grid += `<line x1="${padX}" y1="${yPos}" x2="${width - padX}" y2="${yPos}" stroke="rgba(34,38,43,0.1)" />`;
        grid += `<text x="${padX - 8}" y="${yPos + 4}" text-anchor="end" fill="#5d6670" font-size="11">${fmt(Math.round(value))}</text>`;
      }

      const labelEvery = dates.length > 10 ? Math.ceil(dates.length / 10) : 1;
      const xLabels = dates
        .map((date, i) => {
          if (i % labelEvery !== 0) return '';
          return `<text x="${x(date)}" y="${height - padY + 18}" text-anchor="middle" fill="#5d6670" font-size="11">${shortDate(date)}</text>`;
        })
        .join('');

      const body = seriesList
        .map((series, i) => {
          const color = series.color || PALETTE[i % PALETTE.length];
          const ordered = [...series.points].sort((a, b) => (a.date < b.date ? -1 : 1));
          const path = ordered
            .map((p, j) => `${j === 0 ? 'M' : 'L'} ${x(p.date).toFixed(1)} ${y(p.value).toFixed(1)}`)
            .join(' ');
          const markers = ordered
            .map((p) => `<circle cx="${x(p.date).toFixed(1)}" cy="${y(p.value).toFixed(1)}" r="3.5" fill="#fff" stroke="${color}" stroke-width="2" />`)
            .join('');
          const labels = options.pointLabels
            ? ordered
                .filter((p) => p.value > 0)
                .map((p) => `<text x="${x(p.date).toFixed(1)}" y="${(y(p.value) - 8).toFixed(1)}" text-anchor="middle" fill="${color}" font-size="10">${fmt(p.value)}${series.unit || ''}</text>`)
                .join('')
            : '';
          return `<path d="${path}" fill="none" stroke="${color}" stroke-width="2.5" />${markers}${labels}`;
        })
        .join('');

      svg.innerHTML = grid + xLabels + body;

      legendEl.innerHTML = seriesList
        .map((series, i) => {
          const color = series.color || PALETTE[i % PALETTE.length];
          return `<span><span class="swatch" style="background:${color}"></span>${series.name}</span>`;
        })
        .join('');
    };

    const renderParticipant = (report) => {
      const daily = report.daily;
      if (!daily.length) {
        setBanner(warnEl, `No data found for ${report.participant} in the sheet.`);
        show(participantView, false);
        return;
      }

      const total = (field) => daily.reduce((sum, day) => sum + day[field], 0);
      document.getElementById('tile-attended').textContent = fmt(total('attended'));
      document.getElementById('tile-readings').textContent = fmt(total('reading_count'));
      document.getElementById('tile-prayer').textContent = fmt(total('prayer_count'));
      document.getElementById('tile-fee').textContent = fmt(total('fee'));

      renderChart(
        document.getElementById('activity-chart'),
        document.getElementById('activity-legend'),
        [
          { name: 'Attended', points: daily.map((d) => ({ date: d.date, value: d.attended })) },
          { name: 'Readings', unit: '회', points: daily.map((d) => ({ date: d.date, value: d.reading_count })) },
          { name: 'Chapters', unit: '장', points: daily.map((d) => ({ date: d.date, value: d.chapter_end })) },
          { name: 'Prayer days', points: daily.map((d) => ({ date: d.date, value: d.prayer_count })) },
        ],
        { pointLabels: true }
      );

      renderChart(
        document.getElementById('fee-chart'),
        document.getElementById('fee-legend'),
        [
          { name: 'Daily fee', color: '#c2572b', unit: '원', points: daily.map((d) => ({ date: d.date, value: d.fee })) },
          { name: 'Running total', color: '#2f6db3', points: report.cumulative_fee.map((p) => ({ date: p.date, value: p.total })) },
        ],
        { pointLabels: true }
      );

      show(participantView, true);
    };

    const renderAll = (report) => {
      const rankingEl = document.getElementById('ranking');
      if (!report.ranking.length) {
        setBanner(warnEl, 'The sheet has no usable rows yet.');
        show(allView, false);
        return;
      }

      const maxAttended = Math.max(...report.ranking.map((r) => r.total_attended), 1);
      rankingEl.innerHTML = report.ranking
        .map(
          (r) => `
            <div class="row">
              <span>${r.participant}</span>
              <div class="bar-track"><div class="bar" style="width:${(r.total_attended / maxAttended) * 100}%"></div></div>
              <span class="count">${fmt(r.total_attended)}</span>
            </div>`
        )
        .join('');

      const series = Object.entries(report.cumulative_fee).map(([name, points], i) => ({
        name,
        color: PALETTE[i % PALETTE.length],
        points: points.map((p) => ({ date: p.date, value: p.total })),
      }));
      renderChart(document.getElementById('all-fee-chart'), document.getElementById('all-fee-legend'), series);

      show(allView, true);
    };

    const resetViews = () => {
      show(participantView, false);
      show(allView, false);
      setBanner(warnEl, '');
      setBanner(errorEl, '');
      show(helpEl, false);
    };

    const loadReport = async (value) => {
      resetViews();
      if (!value) {
        show(helpEl, true);
        return;
      }

      const res = await fetch(`/api/report?participant=${encodeURIComponent(value)}`);
      if (!res.ok) {
        setBanner(errorEl, await res.text() || 'The sheet could not be loaded.');
        return;
      }

      const report = await res.json();
      if (report.mode === 'participant') {
        renderParticipant(report);
      } else if (report.mode === 'all') {
        renderAll(report);
      } else {
        show(helpEl, true);
      }
    };

    const loadParticipants = async () => {
      const res = await fetch('/api/participants');
      if (!res.ok) {
        setBanner(errorEl, await res.text() || 'The sheet could not be loaded.');
        return;
      }
      const data = await res.json();
      const all = document.createElement('option');
      all.value = ALL;
      all.textContent = 'All participants';
      selectEl.appendChild(all);
      for (const name of data.participants) {
        const option = document.createElement('option');
        option.value = name;
        option.textContent = name;
        selectEl.appendChild(option);
      }
    };

    selectEl.addEventListener('change', () => {
      loadReport(selectEl.value).catch((err) => setBanner(errorEl, err.message));
    });

    loadParticipants().catch((err) => setBanner(errorEl, err.message));
  </script>
</body>
</html>
"##;
