/// Lab front page: parameter form, point measurement and I-V plot.
pub const INDEX_HTML: &str = r##"<!doctype html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <title>Diode Lab</title>
    <style>
      body { margin: 0; font-family: "Segoe UI", sans-serif; background: #0b0c10; color: #e6e6e6; }
      main { display: grid; grid-template-columns: 320px 1fr; gap: 16px; padding: 16px; }
      section { background: #11151b; border: 1px solid #2a2f36; border-radius: 10px; padding: 12px; }
      label { display: block; font-size: 12px; color: #9aa3ad; margin-top: 8px; }
      input, select, button { width: 100%; box-sizing: border-box; background: #0f141b; color: #e6e6e6; border: 1px solid #2a2f36; border-radius: 6px; padding: 6px; }
      button { margin-top: 10px; cursor: pointer; }
      #status { font-weight: 600; margin-top: 10px; }
      canvas { width: 100%; height: 420px; }
    </style>
  </head>
  <body>
    <main>
      <section>
        <div id="login">
          <label>Username <input id="username" value="admin" /></label>
          <label>Password <input id="password" type="password" /></label>
          <button id="loginButton">Log in</button>
        </div>
        <label>Material
          <select id="material"><option>Si</option><option>Zener</option><option>Ge</option></select>
        </label>
        <label>Temperature (C) <input id="temp" type="number" value="27" /></label>
        <label>Zener voltage (V) <input id="zener_v" type="number" value="5.1" step="0.1" /></label>
        <label>Ideality factor <input id="ideality" type="number" value="1.5" step="0.1" /></label>
        <label>Voltage (V) <input id="voltage" type="number" value="0.6" step="0.01" /></label>
        <button id="measureButton">Measure</button>
        <label>Sweep start (V) <input id="start" type="number" value="-2" step="0.5" /></label>
        <button id="sweepButton">Sweep</button>
        <button id="logoutButton">Log out</button>
        <div id="status"></div>
      </section>
      <section><canvas id="plot" width="900" height="420"></canvas></section>
    </main>
    <script>
      const $ = (id) => document.getElementById(id);
      const diode = () => ({
        material: $("material").value,
        temp: $("temp").value,
        zener_v: $("zener_v").value,
        ideality: $("ideality").value,
      });
      async function post(path, body) {
        const res = await fetch(path, {
          method: "POST",
          credentials: "include",
          headers: { "Content-Type": "application/json" },
          body: JSON.stringify(body || {}),
        });
        const json = await res.json();
        if (!res.ok) throw new Error(json.error ? json.error.message : json.status);
        return json;
      }
      function plot(points) {
        const c = $("plot"), g = c.getContext("2d");
        g.clearRect(0, 0, c.width, c.height);
        if (!points.length) return;
        const vs = points.map((p) => p.v), is = points.map((p) => p.i);
        const vmin = Math.min(...vs), vmax = Math.max(...vs);
        const imin = Math.min(...is), imax = Math.max(...is) || 1;
        g.strokeStyle = "#3c6a9e";
        g.beginPath();
        points.forEach((p, k) => {
          const x = ((p.v - vmin) / (vmax - vmin || 1)) * c.width;
          const y = c.height - ((p.i - imin) / (imax - imin || 1)) * c.height;
          k ? g.lineTo(x, y) : g.moveTo(x, y);
        });
        g.stroke();
      }
      const report = (text) => ($("status").textContent = text);
      $("loginButton").onclick = () =>
        post("/api/login", { username: $("username").value, password: $("password").value })
          .then(() => report("logged in")).catch((e) => report(e.message));
      $("logoutButton").onclick = () => post("/api/logout").then(() => report("logged out"));
      $("measureButton").onclick = () =>
        post("/api/measure", { ...diode(), voltage: $("voltage").value })
          .then((m) => report(`I = ${m.current.toExponential(3)} A, P = ${m.power.toExponential(3)} W, ${m.status}`))
          .catch((e) => report(e.message));
      $("sweepButton").onclick = () =>
        post("/api/sweep", { ...diode(), start: $("start").value })
          .then((r) => plot(r.data)).catch((e) => report(e.message));
    </script>
  </body>
</html>
"##;
