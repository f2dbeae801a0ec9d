//! The embedded web page: submit form, inline error line, SVG bar chart.
//!
//! The page is a single static string; all data flows through the JSON API
//! and the chart is redrawn in full from the returned description after
//! every interaction.

pub const PAGE_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>Sleep Logger</title>
<style>
  :root {
    --bg: #fafafa; --panel: #ffffff; --border: #d8d8d8;
    --accent: #2a6fb0; --text: #222; --muted: #777; --err: #c0392b;
    --bar: #3b6fd4;
  }
  * { box-sizing: border-box; margin: 0; padding: 0; }
  body { background: var(--bg); color: var(--text); font-family: sans-serif; font-size: 14px; }

  header {
    padding: 14px 24px; background: var(--panel);
    border-bottom: 1px solid var(--border);
  }
  header h1 { font-size: 18px; color: var(--accent); }

  form#entry-form {
    display: flex; gap: 16px; align-items: flex-end; flex-wrap: wrap;
    padding: 16px 24px; background: var(--panel);
    border-bottom: 1px solid var(--border);
  }
  .field { display: flex; flex-direction: column; gap: 4px; }
  .field label { font-size: 12px; color: var(--muted); }
  .field input {
    border: 1px solid var(--border); border-radius: 3px;
    padding: 6px 10px; font-size: 14px; width: 190px;
  }
  button {
    background: var(--accent); color: white; border: none; border-radius: 3px;
    padding: 7px 20px; font-size: 14px; cursor: pointer;
  }
  #error-line { color: var(--err); font-size: 13px; min-height: 18px; padding: 6px 24px; }

  #chart-region { padding: 8px 24px 24px; }
  #chart-svg { width: 100%; height: 640px; background: var(--panel); border: 1px solid var(--border); }
  .tick-label { font-size: 10px; fill: var(--muted); }
  .axis-title { font-size: 12px; fill: var(--text); }
  .chart-title { font-size: 15px; fill: var(--text); }
  .gridline { stroke: var(--border); stroke-width: 0.5; }
  .bar { fill: var(--bar); }
</style>
</head>
<body>
<header><h1>Sleep Logger</h1></header>

<form id="entry-form">
  <div class="field">
    <label for="start-input">Start time (YYYY-MM-DD HH:MM):</label>
    <input id="start-input" type="text" value="">
  </div>
  <div class="field">
    <label for="end-input">End time (YYYY-MM-DD HH:MM):</label>
    <input id="end-input" type="text" value="">
  </div>
  <button id="add-button" type="submit">Add</button>
</form>

<div id="error-line"></div>
<div id="chart-region"><svg id="chart-svg"></svg></div>

<script>
const SVG_NS = 'http://www.w3.org/2000/svg';

function el(tag, attrs, text) {
  const node = document.createElementNS(SVG_NS, tag);
  for (const [k, v] of Object.entries(attrs)) node.setAttribute(k, v);
  if (text !== undefined) node.textContent = text;
  return node;
}

function drawChart(chart) {
  const svg = document.getElementById('chart-svg');
  svg.replaceChildren();
  const W = svg.clientWidth || 960, H = 640;
  const padL = 70, padR = 20, padT = 40, padB = 50;
  const plotW = W - padL - padR, plotH = H - padT - padB;
  const [yMin, yMax] = chart.y_axis.range;
  const yFor = v => padT + (yMax - v) / (yMax - yMin) * plotH;

  svg.appendChild(el('text', { x: W / 2, y: 22, 'text-anchor': 'middle', class: 'chart-title' }, chart.title));

  chart.y_axis.tick_labels.forEach((label, hour) => {
    const y = yFor(hour);
    svg.appendChild(el('line', { x1: padL, y1: y, x2: W - padR, y2: y, class: 'gridline' }));
    svg.appendChild(el('text', { x: padL - 8, y: y + 3, 'text-anchor': 'end', class: 'tick-label' }, label));
  });
  svg.appendChild(el('text', {
    x: 16, y: padT + plotH / 2, class: 'axis-title',
    transform: `rotate(-90 16 ${padT + plotH / 2})`, 'text-anchor': 'middle'
  }, chart.y_axis.title));
  svg.appendChild(el('text', { x: padL + plotW / 2, y: H - 12, 'text-anchor': 'middle', class: 'axis-title' }, chart.x_axis.title));

  const dates = [...new Set(chart.bars.map(b => b.date))].sort();
  const colW = plotW / Math.max(dates.length, 1);
  const barW = Math.min(colW * 0.6, 48);

  dates.forEach((date, i) => {
    const x = padL + (i + 0.5) * colW;
    svg.appendChild(el('text', { x, y: padT + plotH + 16, 'text-anchor': 'middle', class: 'tick-label' }, date));
  });

  for (const bar of chart.bars) {
    const i = dates.indexOf(bar.date);
    const x = padL + (i + 0.5) * colW - barW / 2;
    const h = bar.height / (yMax - yMin) * plotH;
    // A negative height (interval crossing midnight) draws nothing, the
    // same way the description records it.
    if (h <= 0) continue;
    svg.appendChild(el('rect', { x, y: yFor(bar.base + bar.height), width: barW, height: h, class: 'bar' }));
  }
}

function render(outcome) {
  document.getElementById('error-line').textContent = outcome.error || '';
  drawChart(outcome.chart);
}

async function refresh() {
  const resp = await fetch('/api/chart');
  render(await resp.json());
}

document.getElementById('entry-form').addEventListener('submit', async ev => {
  ev.preventDefault();
  const start = document.getElementById('start-input').value;
  const end = document.getElementById('end-input').value;
  const resp = await fetch('/api/entries', {
    method: 'POST',
    headers: { 'Content-Type': 'application/json' },
    body: JSON.stringify({ start, end })
  });
  render(await resp.json());
});

refresh();
</script>
</body>
</html>
"##;
